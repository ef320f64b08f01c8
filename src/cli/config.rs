//! Configuration file structure
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "data_file": "library_data.txt",
//!   "on_malformed_line": "abort",
//!   "log_level": "warn"
//! }
//! ```
//!
//! Command-line flags override values read from the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::Cli;
use super::errors::{CliError, CliResult};
use crate::observability::LogLevel;
use crate::storage::MalformedLinePolicy;

/// Default catalog file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "library_data.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file path
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// What to do with malformed catalog lines
    #[serde(default)]
    pub on_malformed_line: MalformedLinePolicy,

    /// Minimum log level written to stderr
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            on_malformed_line: MalformedLinePolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Builds the effective configuration: file (if given), then flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(data_file) = &cli.data_file {
            config.data_file = data_file.clone();
        }
        if cli.skip_malformed {
            config.on_malformed_line = MalformedLinePolicy::Skip;
        }
        if let Some(level) = cli.log_level {
            config.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }
        Ok(())
    }

    /// Catalog file path
    pub fn data_path(&self) -> &Path {
        &self.data_file
    }
}
