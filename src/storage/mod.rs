//! Flat-file persistence for the shelfdb catalog
//!
//! The catalog file is plain text, one book per line:
//!
//! ```text
//! id|title|author|quantity
//! ```
//!
//! The file is read once when a session starts and rewritten once when it
//! ends. Nothing is persisted between those two points.
//!
//! # Guarantees
//!
//! - A missing file loads as an empty catalog
//! - `save` followed by `load` yields the same set of books, provided no title
//!   or author contains the `|` delimiter
//! - Malformed lines either abort the load or are skipped with a warning,
//!   never silently accepted

mod errors;
mod reader;
mod record;
mod writer;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use reader::{load, load_from, CatalogReader, LoadSummary, MalformedLinePolicy};
pub use record::{
    contains_delimiter, decode_line, encode_line, LineError, FIELD_COUNT, FIELD_DELIMITER,
    RECORD_DELIMITER,
};
pub use writer::{save, CatalogWriter};
