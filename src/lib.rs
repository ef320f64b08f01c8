//! shelfdb - a small book catalog backed by a flat file
//!
//! - `catalog`: the in-memory record store
//! - `storage`: load/save of the `id|title|author|quantity` file
//! - `observability`: structured JSON logging
//! - `cli`: argument parsing, configuration and the interactive menu

pub mod catalog;
pub mod cli;
pub mod observability;
pub mod storage;
