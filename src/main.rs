//! shelfdb CLI entry point
//!
//! Opens nothing itself: everything is delegated to `cli::run`.
//! Errors are printed to stderr with a non-zero exit status.

use shelfdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
