//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{
    parse_members, Cli, Commands, ConfigCommands, ExpenseCommands, GroupCommands,
};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{validate_expense, DomainError, Expense, Group};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Group { command }) => _group(container, command),
        Some(Commands::Expense { command }) => _expense(container, command),
        Some(Commands::Balance { group }) => _balance(container, group),
        Some(Commands::Settle { group }) => _settle(container, group),
        Some(Commands::Reset { yes }) => _reset(container, *yes),
        Some(Commands::Config { command }) => _config(&container.settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `warikan --help`".to_string(),
        )),
    }
}

#[instrument(skip(container))]
fn _group(container: &ServiceContainer, command: &GroupCommands) -> CliResult<()> {
    match command {
        GroupCommands::Add { name, members } => {
            let group = Group::new(name.clone(), parse_members(members));
            debug!("group add: {:?}", group);
            container.groups.add_group(group)?;
            output::success(&format!("group created: {name}"));
        }
        GroupCommands::List => {
            let groups = container.groups.get_groups()?;
            if groups.is_empty() {
                output::info("no groups");
            }
            for group in groups {
                output::info(&format!("{} ({})", group.name, group.members.join(", ")));
            }
        }
        GroupCommands::Show { name } => {
            let group = container
                .groups
                .get_group_by_name(name)?
                .ok_or_else(|| DomainError::GroupNotFound(name.clone()))?;
            let expenses = container.expenses.get_expenses(name)?;

            output::header(&group.name);
            output::info("members:");
            for member in &group.members {
                output::detail(member);
            }
            output::info("expenses:");
            if expenses.is_empty() {
                output::detail("none");
            }
            for e in &expenses {
                output::detail(&format!("{}: {} ({})", e.expense_name, e.amount, e.payer));
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _expense(container: &ServiceContainer, command: &ExpenseCommands) -> CliResult<()> {
    match command {
        ExpenseCommands::Add {
            group,
            name,
            amount,
            payer,
        } => {
            let expense = Expense::new(group.clone(), name.clone(), *amount, payer.clone());
            let errors = validate_expense(&expense);
            if !errors.is_empty() {
                return Err(DomainError::InvalidExpense(errors).into());
            }
            container.expenses.add_expense(expense)?;
            output::success(&format!("expense recorded: {name} {amount} ({payer})"));
        }
        ExpenseCommands::List { group } => {
            let expenses = container.expenses.get_expenses(group)?;
            if expenses.is_empty() {
                output::info("no expenses");
            }
            for e in expenses {
                output::info(&format!("{}\t{}\t{}", e.expense_name, e.amount, e.payer));
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn _balance(container: &ServiceContainer, group: &str) -> CliResult<()> {
    let balances = container.expenses.get_balances(group)?;
    output::header(&format!("{:<16} {:>10} {:>10} {:>10}", "member", "paid", "share", "net"));
    for b in balances {
        output::info(&format!(
            "{:<16} {:>10} {:>10} {:>+10}",
            b.member, b.paid, b.fair_share, b.net
        ));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _settle(container: &ServiceContainer, group: &str) -> CliResult<()> {
    let settlements = container.expenses.get_settlements(group)?;
    if settlements.is_empty() {
        output::success(&format!("{group}: nothing to settle"));
        return Ok(());
    }
    output::header(&format!("{group}: {} payment(s)", settlements.len()));
    for s in &settlements {
        output::payment(&s.from, &s.to, s.amount);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _reset(container: &ServiceContainer, yes: bool) -> CliResult<()> {
    if !yes && !confirm("Delete all groups and expenses? [y/N]")? {
        output::warning("reset aborted");
        return Ok(());
    }
    container.expenses.clear()?;
    container.groups.clear()?;
    output::success("all data removed");
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(p) => output::info(&format!("global config: {}", p.display())),
                None => output::warning("no global config location on this platform"),
            }
            output::info(&format!("groups:        {}", settings.groups_path().display()));
            output::info(&format!("expenses:      {}", settings.expenses_path().display()));
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn confirm(question: &str) -> CliResult<bool> {
    output::prompt(question);
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| InfraError::io("read confirmation", e))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
