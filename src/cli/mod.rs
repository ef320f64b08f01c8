//! CLI module for shelfdb
//!
//! Provides:
//! - menu: interactive session (default)
//! - list / get / search: read-only one-shot commands
//! - add / update / delete: one-shot commands that save on success

mod actions;
mod args;
mod commands;
mod config;
mod errors;
mod io;
mod menu;

pub use args::{Cli, Command};
pub use commands::{close_catalog, oneshot, open_catalog, run, run_command, run_menu};
pub use config::{Config, DEFAULT_DATA_FILE};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{Console, Input};
pub use menu::{MenuChoice, MenuSession, SessionEnd};
