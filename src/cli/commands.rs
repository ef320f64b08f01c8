//! CLI command implementations
//!
//! Every command follows the same lifecycle:
//! load the catalog → operate on it → save it (menu and mutations only).
//! The catalog file is touched exactly at those two points.

use std::io::{self, BufRead, Write};

use super::actions;
use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::Console;
use super::menu::{MenuSession, SessionEnd};
use crate::catalog::Catalog;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::storage;

/// Main CLI entry point
///
/// Parses arguments, resolves configuration and dispatches.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = Config::resolve(&cli)?;

    Logger::set_level(config.log_level);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_file", config.data_path().display().to_string().as_str())],
    );

    run_command(&config, cli.command.unwrap_or(Command::Menu))
}

/// Run one command against stdin/stdout
pub fn run_command(config: &Config, cmd: Command) -> CliResult<()> {
    let stdout = io::stdout();
    match cmd {
        Command::Menu => {
            let stdin = io::stdin();
            run_menu(config, stdin.lock(), stdout.lock()).map(|_| ())
        }
        other => oneshot(config, other, &mut stdout.lock()),
    }
}

/// Loads the catalog named by the configuration.
pub fn open_catalog(config: &Config) -> CliResult<Catalog> {
    let (catalog, _summary) = storage::load(config.data_path(), config.on_malformed_line)
        .map_err(CliError::load_failed)?;
    Ok(catalog)
}

/// Writes the catalog back to the configured file.
pub fn close_catalog(config: &Config, catalog: &Catalog) -> CliResult<()> {
    storage::save(config.data_path(), catalog).map_err(CliError::save_failed)?;
    Ok(())
}

/// Runs an interactive menu session.
///
/// The catalog is saved when the session ends, whether by "Exit" or end of
/// input, and also when the console fails mid-session. A save failure is
/// reported as an error after the session has finished.
pub fn run_menu<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> CliResult<SessionEnd> {
    log_event(Event::SessionStart);
    let mut catalog = open_catalog(config)?;

    let session_result = MenuSession::new(&mut catalog, Console::new(input, output)).run();
    let save_result = close_catalog(config, &catalog);

    let end = session_result?;
    save_result?;

    log_event(Event::SessionEnd);
    Ok(end)
}

/// Runs a single non-interactive command.
///
/// Mutating commands save the catalog only if the operation succeeded.
pub fn oneshot<W: Write>(config: &Config, cmd: Command, out: &mut W) -> CliResult<()> {
    let mut catalog = open_catalog(config)?;
    let mutates = cmd.is_mutation();

    match cmd {
        Command::Menu => {
            return Err(CliError::io_error("menu is interactive; use run_command"));
        }
        Command::List => actions::list_books(&catalog, out)?,
        Command::Get { id } => actions::show_book(&catalog, out, id)?,
        Command::Search { key } => actions::search_title(&catalog, out, &key)?,
        Command::Add {
            id,
            title,
            author,
            quantity,
        } => actions::add_book(&mut catalog, out, id, &title, &author, quantity)?,
        Command::Update { id, quantity } => {
            actions::update_quantity(&mut catalog, out, id, quantity)?
        }
        Command::Delete { id } => actions::delete_book(&mut catalog, out, id)?,
    }
    out.flush()?;

    if mutates {
        close_catalog(config, &catalog)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> Config {
        Config {
            data_file: dir.path().join("books.txt"),
            ..Config::default()
        }
    }

    #[test]
    fn test_oneshot_add_saves() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let mut out = Vec::new();
        oneshot(
            &config,
            Command::Add {
                id: 1,
                title: "Dune".into(),
                author: "Herbert".into(),
                quantity: 5,
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(out, b"Book added successfully.\n");
        assert_eq!(
            fs::read_to_string(config.data_path()).unwrap(),
            "1|Dune|Herbert|5\n"
        );
    }

    #[test]
    fn test_oneshot_read_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let mut out = Vec::new();
        oneshot(&config, Command::List, &mut out).unwrap();

        assert_eq!(out, b"No books available.\n");
        assert!(!config.data_path().exists());
    }

    #[test]
    fn test_oneshot_failed_mutation_does_not_save() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(config.data_path(), "1|Dune|Herbert|5\n").unwrap();

        let mut out = Vec::new();
        let err = oneshot(&config, Command::Delete { id: 2 }, &mut out).unwrap_err();
        assert_eq!(err.code_str(), "SHELF_CLI_CATALOG_ERROR");
        assert_eq!(
            fs::read_to_string(config.data_path()).unwrap(),
            "1|Dune|Herbert|5\n"
        );
    }

    #[test]
    fn test_menu_saves_on_end_of_input() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let input = Cursor::new(b"1\n3\nEmma\nJane Austen\n2\n".to_vec());
        let end = run_menu(&config, input, Vec::new()).unwrap();

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(
            fs::read_to_string(config.data_path()).unwrap(),
            "3|Emma|Jane Austen|2\n"
        );
    }

    #[test]
    fn test_menu_refuses_malformed_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::write(config.data_path(), "1|Dune|Herbert\n").unwrap();

        let err = run_menu(&config, Cursor::new(b"7\n".to_vec()), Vec::new()).unwrap_err();
        assert_eq!(err.code_str(), "SHELF_CLI_LOAD_FAILED");
        // The file is left untouched
        assert_eq!(
            fs::read_to_string(config.data_path()).unwrap(),
            "1|Dune|Herbert\n"
        );
    }
}
