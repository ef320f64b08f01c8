//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb [menu]
//! - shelfdb list
//! - shelfdb get <id>
//! - shelfdb search <key>
//! - shelfdb add <id> <title> <author> <quantity>
//! - shelfdb update <id> <quantity>
//! - shelfdb delete <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::BookId;
use crate::observability::LogLevel;

/// shelfdb - a small book catalog backed by a flat file
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (overrides the configuration)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Skip malformed catalog lines instead of refusing to start
    /// (skipped lines are dropped from the file on the next save)
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Minimum log level: trace, info, warn, error or off
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Print every book
    List,

    /// Print one book
    Get {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
    },

    /// Print books whose title contains KEY
    Search { key: String },

    /// Add a book
    Add {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
        title: String,
        author: String,
        quantity: u32,
    },

    /// Set the quantity of a book
    Update {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
        quantity: u32,
    },

    /// Remove a book
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: BookId,
    },
}

impl Command {
    /// Returns true if the command changes the catalog
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Update { .. } | Command::Delete { .. }
        )
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
