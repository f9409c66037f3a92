//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Shared expense tracking for groups: record who paid, compute who pays whom
#[derive(Parser, Debug)]
#[command(name = "warikan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Additional config file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage groups
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Record and list expenses
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },

    /// Show paid / fair share / net per member
    Balance {
        /// Group name
        group: String,
    },

    /// Show who pays whom to settle a group
    Settle {
        /// Group name
        group: String,
    },

    /// Delete all groups and expenses
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Create a group
    Add {
        /// Group name
        name: String,
        /// Members, in order (separate arguments or comma-separated)
        members: Vec<String>,
    },

    /// List groups
    List,

    /// Show members and expenses of a group
    Show {
        /// Group name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense paid by one member
    Add {
        /// Group name
        #[arg(short, long)]
        group: String,
        /// What the expense was for
        #[arg(short, long)]
        name: String,
        /// Amount in the smallest currency unit
        #[arg(short, long)]
        amount: u64,
        /// Member who paid
        #[arg(short, long)]
        payer: String,
    },

    /// List expenses of a group
    List {
        /// Group name
        group: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config and data paths
    Path,

    /// Print config template
    Template,
}

/// Split member arguments on commas, trimming each name.
///
/// `["太朗, 花子", "次郎"]` → `["太朗", "花子", "次郎"]`. Empty pieces are dropped;
/// duplicates are kept for validation to report.
pub fn parse_members(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}
