//! Observable events for shelfdb
//!
//! Events are explicit and typed; each maps to a fixed upper-case name.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Session startup begins
    SessionStart,
    /// Session finished, catalog flushed
    SessionEnd,
    /// Configuration loaded
    ConfigLoaded,

    // Persistence (load and save themselves are logged by ObservationScope)
    /// Malformed line dropped during load
    LineSkipped,
    /// A title or author contains the field delimiter
    DelimiterInField,

    // Catalog mutations
    /// Book added
    BookAdded,
    /// Book quantity updated
    BookUpdated,
    /// Book deleted
    BookDeleted,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SHELFDB_SESSION_BEGIN",
            Event::SessionEnd => "SHELFDB_SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::LineSkipped => "CATALOG_LINE_SKIPPED",
            Event::DelimiterInField => "DELIMITER_IN_FIELD",

            Event::BookAdded => "BOOK_ADDED",
            Event::BookUpdated => "BOOK_QUANTITY_UPDATED",
            Event::BookDeleted => "BOOK_DELETED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::LineSkipped | Event::DelimiterInField => Severity::Warn,
            Event::BookAdded | Event::BookUpdated | Event::BookDeleted => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
