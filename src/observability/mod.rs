//! Observability subsystem for shelfdb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Begin/complete scopes around load and save
//!
//! Observability is read-only: it never changes the outcome of an operation,
//! and a failed log write is ignored.
//!
//! ```ignore
//! use shelfdb::observability::{log_event_with_fields, Event, Logger, LogLevel};
//!
//! Logger::set_level(LogLevel::Info);
//! log_event_with_fields(Event::BookAdded, &[("id", "1")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{LogLevel, Logger, Severity};
pub use scope::ObservationScope;

#[cfg(test)]
pub(crate) use logger::capture;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
