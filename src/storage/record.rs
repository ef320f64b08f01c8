//! Catalog line format
//!
//! One book per line, four fields joined by `|`:
//!
//! ```text
//! <id>|<title>|<author>|<quantity>\n
//! ```
//!
//! There is no quoting or escaping. A title or author that contains `|`, `\n`
//! or `\r` is written as-is and no longer decodes on the next load.

use thiserror::Error;

use crate::catalog::{Book, BookId};

/// Separator between the fields of a line
pub const FIELD_DELIMITER: char = '|';

/// Separator between lines
pub const RECORD_DELIMITER: char = '\n';

/// Number of fields on every line
pub const FIELD_COUNT: usize = 4;

/// Why a single catalog line could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 4 fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("invalid book id: '{0}'")]
    InvalidId(String),

    #[error("invalid quantity: '{0}'")]
    InvalidQuantity(String),

    #[error("duplicate book id: {0}")]
    DuplicateId(BookId),

    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Encodes a book as a line, without the trailing newline.
pub fn encode_line(book: &Book) -> String {
    format!(
        "{id}{d}{title}{d}{author}{d}{quantity}",
        id = book.id(),
        title = book.title,
        author = book.author,
        quantity = book.quantity,
        d = FIELD_DELIMITER,
    )
}

/// Decodes one line into a book.
///
/// A trailing `\n` or `\r\n` is ignored. Whitespace around the id and the
/// quantity is tolerated; title and author are kept verbatim.
pub fn decode_line(line: &str) -> Result<Book, LineError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let &[id, title, author, quantity] = fields.as_slice() else {
        return Err(LineError::WrongFieldCount {
            found: fields.len(),
        });
    };

    let id: BookId = id
        .trim()
        .parse()
        .map_err(|_| LineError::InvalidId(id.to_string()))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| LineError::InvalidQuantity(quantity.to_string()))?;

    Ok(Book::new(id, title, author, quantity))
}

/// Returns true if the book would not survive an encode/decode cycle.
///
/// That is the case when the title or author contains the field delimiter
/// or a line break.
pub fn contains_delimiter(book: &Book) -> bool {
    let breaks_format = |c: char| c == FIELD_DELIMITER || c == RECORD_DELIMITER || c == '\r';
    book.title.contains(breaks_format) || book.author.contains(breaks_format)
}
