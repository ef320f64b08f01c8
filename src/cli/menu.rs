//! Interactive menu session
//!
//! The session owns nothing: it borrows the catalog for its whole run and
//! talks to the user through a `Console`. It ends on "Exit" or when input is
//! exhausted. Saving is the caller's job.

use std::io::{BufRead, Write};

use super::actions;
use super::errors::CliResult;
use super::io::{Console, Input};
use crate::catalog::{BookId, Catalog};

pub const MENU_TEXT: &str = "\n---------------- Library Menu ----------------\n\
1. Add Book\n\
2. Search Book by ID\n\
3. Search Book by Title (Partial)\n\
4. Display All Books\n\
5. Update Quantity\n\
6. Delete Book by ID\n\
7. Exit\n";

pub const MSG_INVALID_CHOICE: &str = "Invalid choice.";
pub const MSG_INVALID_INPUT: &str = "Invalid input.";
pub const MSG_EXITING: &str = "Exiting...";

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    SearchById,
    SearchByTitle,
    DisplayAll,
    UpdateQuantity,
    DeleteBook,
    Exit,
}

impl MenuChoice {
    /// Maps the number typed by the user to a menu entry
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::AddBook),
            2 => Some(Self::SearchById),
            3 => Some(Self::SearchByTitle),
            4 => Some(Self::DisplayAll),
            5 => Some(Self::UpdateQuantity),
            6 => Some(Self::DeleteBook),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose "Exit"
    Exit,
    /// Input ran out
    EndOfInput,
}

/// Control flow after one menu action
enum Step {
    Continue,
    Stop(SessionEnd),
}

/// Extracts a value from an `Input`, reporting bad input and stopping on EOF.
macro_rules! read_or_return {
    ($self:ident, $input:expr) => {
        match $input {
            Input::Value(value) => value,
            Input::Invalid(_) => {
                $self.console.say(MSG_INVALID_INPUT)?;
                return Ok(Step::Continue);
            }
            Input::Eof => return Ok(Step::Stop(SessionEnd::EndOfInput)),
        }
    };
}

/// A menu session over a borrowed catalog.
pub struct MenuSession<'c, R, W> {
    catalog: &'c mut Catalog,
    console: Console<R, W>,
}

impl<'c, R: BufRead, W: Write> MenuSession<'c, R, W> {
    pub fn new(catalog: &'c mut Catalog, console: Console<R, W>) -> Self {
        Self { catalog, console }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Catalog errors are shown as `Error: <message>` and the session goes on.
    /// Only console I/O failures end the session with an error.
    pub fn run(&mut self) -> CliResult<SessionEnd> {
        loop {
            self.console.print(MENU_TEXT)?;

            let choice = match self.console.prompt_parse::<u32>("Enter choice: ")? {
                Input::Value(n) => MenuChoice::from_number(n),
                Input::Invalid(_) => None,
                Input::Eof => return Ok(SessionEnd::EndOfInput),
            };

            let Some(choice) = choice else {
                self.console.say(MSG_INVALID_CHOICE)?;
                continue;
            };

            match self.dispatch(choice) {
                Ok(Step::Continue) => {}
                Ok(Step::Stop(end)) => return Ok(end),
                Err(e) if e.catalog_error().is_some() => {
                    self.console.say(&format!("Error: {}", e.message()))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Consumes the session, returning the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<Step> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::SearchById => {
                let id: BookId =
                    read_or_return!(self, self.console.prompt_parse("Enter Book ID: ")?);
                actions::show_book(self.catalog, self.console.output(), id)?;
                Ok(Step::Continue)
            }
            MenuChoice::SearchByTitle => {
                let key = read_or_return!(self, self.console.prompt_line("Enter title keyword: ")?);
                actions::search_title(self.catalog, self.console.output(), &key)?;
                Ok(Step::Continue)
            }
            MenuChoice::DisplayAll => {
                actions::list_books(self.catalog, self.console.output())?;
                Ok(Step::Continue)
            }
            MenuChoice::UpdateQuantity => {
                let id: BookId =
                    read_or_return!(self, self.console.prompt_parse("Enter Book ID: ")?);
                let quantity: u32 =
                    read_or_return!(self, self.console.prompt_parse("Enter new quantity: ")?);
                actions::update_quantity(self.catalog, self.console.output(), id, quantity)?;
                Ok(Step::Continue)
            }
            MenuChoice::DeleteBook => {
                let id: BookId =
                    read_or_return!(self, self.console.prompt_parse("Enter Book ID to delete: ")?);
                actions::delete_book(self.catalog, self.console.output(), id)?;
                Ok(Step::Continue)
            }
            MenuChoice::Exit => {
                self.console.say(MSG_EXITING)?;
                Ok(Step::Stop(SessionEnd::Exit))
            }
        }
    }

    fn add_book(&mut self) -> CliResult<Step> {
        let id: BookId = read_or_return!(self, self.console.prompt_parse("Enter Book ID: ")?);
        let title = read_or_return!(self, self.console.prompt_line("Enter Title: ")?);
        let author = read_or_return!(self, self.console.prompt_line("Enter Author: ")?);
        let quantity: u32 = read_or_return!(self, self.console.prompt_parse("Enter Quantity: ")?);

        actions::add_book(
            self.catalog,
            self.console.output(),
            id,
            &title,
            &author,
            quantity,
        )?;
        Ok(Step::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(catalog: &mut Catalog, input: &str) -> (SessionEnd, String) {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut session = MenuSession::new(catalog, console);
        let end = session.run().unwrap();
        let out = String::from_utf8(session.into_console().into_output()).unwrap();
        (end, out)
    }

    #[test]
    fn test_choice_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
    }

    #[test]
    fn test_exit_immediately() {
        let mut catalog = Catalog::new();
        let (end, out) = run_session(&mut catalog, "7\n");
        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains("1. Add Book"));
        assert!(out.ends_with("Enter choice: Exiting...\n"));
    }

    #[test]
    fn test_end_of_input() {
        let mut catalog = Catalog::new();
        let (end, _) = run_session(&mut catalog, "");
        assert_eq!(end, SessionEnd::EndOfInput);
    }

    #[test]
    fn test_add_book_through_menu() {
        let mut catalog = Catalog::new();
        let (_, out) = run_session(&mut catalog, "1\n1\nDune Messiah\nFrank Herbert\n5\n7\n");

        assert!(out.contains("Book added successfully."));
        let book = catalog.find_by_id(1).unwrap();
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.quantity, 5);
    }

    #[test]
    fn test_invalid_choice_and_input() {
        let mut catalog = Catalog::new();
        let (_, out) = run_session(&mut catalog, "9\nabc\n2\nnope\n7\n");

        assert_eq!(out.matches(MSG_INVALID_CHOICE).count(), 2);
        assert_eq!(out.matches(MSG_INVALID_INPUT).count(), 1);
    }

    #[test]
    fn test_catalog_errors_do_not_end_session() {
        let mut catalog = Catalog::new();
        catalog.add(1, "Dune", "Herbert", 5).unwrap();

        let (end, out) = run_session(&mut catalog, "1\n1\nX\nY\n1\n6\n4\n5\n4\n3\n7\n");

        assert_eq!(end, SessionEnd::Exit);
        assert!(out.contains("Error: Book ID already exists: 1"));
        assert!(out.contains("Error: Book ID not found: 4"));
        assert_eq!(out.matches("Error: ").count(), 3);
        assert_eq!(catalog.find_by_id(1).unwrap().title, "Dune");
    }

    #[test]
    fn test_eof_mid_prompt_ends_session() {
        let mut catalog = Catalog::new();
        let (end, _) = run_session(&mut catalog, "1\n5\nTitle only\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(catalog.is_empty());
    }
}
