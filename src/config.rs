//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/warikan/warikan.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `WARIKAN_*` prefix (`WARIKAN_DATA_DIR`, ...)
//!
//! The `--data-dir` flag is applied on top by the binary via
//! [`Settings::with_data_dir`].

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "WARIKAN";

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_dir: Option<PathBuf>,
    pub groups_file: Option<String>,
    pub expenses_file: Option<String>,
}

/// Unified configuration for warikan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the data files
    pub data_dir: PathBuf,
    /// Group store file name, relative to `data_dir`
    pub groups_file: String,
    /// Expense store file name, relative to `data_dir`
    pub expenses_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            groups_file: "groups.json".into(),
            expenses_file: "expenses.json".into(),
        }
    }
}

/// Get the default data directory (platform data dir, or ~/.warikan).
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "warikan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.warikan"))
}

/// Get the XDG config directory for warikan.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "warikan").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("warikan.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Path of the group store file.
    pub fn groups_path(&self) -> PathBuf {
        self.data_dir.join(&self.groups_file)
    }

    /// Path of the expense store file.
    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.expenses_file)
    }

    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.data_dir.to_string_lossy().as_ref());
        self.data_dir = PathBuf::from(expanded);
    }

    /// Replace the data directory, expanding `~` and `$VAR` like every
    /// other layer does.
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = dir.to_path_buf();
        self.expand_paths();
        self
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_dir: overlay
                .data_dir
                .clone()
                .unwrap_or_else(|| self.data_dir.clone()),
            groups_file: overlay
                .groups_file
                .clone()
                .unwrap_or_else(|| self.groups_file.clone()),
            expenses_file: overlay
                .expenses_file
                .clone()
                .unwrap_or_else(|| self.expenses_file.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current, Environment::with_prefix(ENV_PREFIX))?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply WARIKAN_* environment variables as explicit overrides.
    ///
    /// Settings are flat, so no key separator is configured and
    /// `WARIKAN_DATA_DIR` maps to `data_dir`.
    fn apply_env_overrides(settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        let raw = RawSettings {
            data_dir: config.get_string("data_dir").ok().map(PathBuf::from),
            groups_file: config.get_string("groups_file").ok(),
            expenses_file: config.get_string("expenses_file").ok(),
        };

        Ok(settings.merge_with(&raw))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# warikan configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/warikan/warikan.toml
#   Explicit: file passed with --config
#   Env:      WARIKAN_* environment variables (e.g. WARIKAN_DATA_DIR)
#   Flag:     --data-dir

# Directory holding the data files (~ and $VAR are expanded)
# data_dir = "~/.local/share/warikan"

# Group store file, relative to data_dir
# groups_file = "groups.json"

# Expense store file, relative to data_dir
# expenses_file = "expenses.json"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
