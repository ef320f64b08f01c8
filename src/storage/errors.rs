//! Storage error types
//!
//! Error codes:
//! - SHELF_STORAGE_IO_ERROR (ERROR severity)
//! - SHELF_STORAGE_READ_FAILED (ERROR severity)
//! - SHELF_STORAGE_WRITE_FAILED (ERROR severity)
//! - SHELF_STORAGE_PARSE_ERROR (FATAL severity) - malformed catalog line

use std::error::Error as StdError;
use std::fmt;
use std::io;

use super::record::LineError;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, process continues
    Error,
    /// The catalog cannot be opened; the session must not start
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Generic file system failure
    ShelfStorageIoError,
    /// Reading the catalog file failed
    ShelfStorageReadFailed,
    /// Writing the catalog file failed
    ShelfStorageWriteFailed,
    /// A catalog line could not be decoded
    ShelfStorageParseError,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::ShelfStorageIoError => "SHELF_STORAGE_IO_ERROR",
            StorageErrorCode::ShelfStorageReadFailed => "SHELF_STORAGE_READ_FAILED",
            StorageErrorCode::ShelfStorageWriteFailed => "SHELF_STORAGE_WRITE_FAILED",
            StorageErrorCode::ShelfStorageParseError => "SHELF_STORAGE_PARSE_ERROR",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::ShelfStorageIoError => Severity::Error,
            StorageErrorCode::ShelfStorageReadFailed => Severity::Error,
            StorageErrorCode::ShelfStorageWriteFailed => Severity::Error,
            StorageErrorCode::ShelfStorageParseError => Severity::Fatal,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message and optional context
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    details: Option<String>,
    line_number: Option<u64>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl StorageError {
    fn with_io_source(code: StorageErrorCode, message: String, source: io::Error) -> Self {
        Self {
            code,
            message,
            details: None,
            line_number: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new storage I/O error
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self::with_io_source(StorageErrorCode::ShelfStorageIoError, message.into(), source)
    }

    /// Create a new read failed error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self::with_io_source(StorageErrorCode::ShelfStorageReadFailed, message.into(), source)
    }

    /// Create a new write failed error
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self::with_io_source(StorageErrorCode::ShelfStorageWriteFailed, message.into(), source)
    }

    /// Create a parse error for a malformed line (1-based line number)
    pub fn parse_error(line_number: u64, reason: LineError) -> Self {
        Self {
            code: StorageErrorCode::ShelfStorageParseError,
            message: reason.to_string(),
            details: Some(format!("line: {}", line_number)),
            line_number: Some(line_number),
            source: Some(Box::new(reason)),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Line that failed to decode, for parse errors
    pub fn line_number(&self) -> Option<u64> {
        self.line_number
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if self.code != StorageErrorCode::ShelfStorageParseError {
            if let Some(ref source) = self.source {
                write!(f, ": {}", source)?;
            }
        }
        Ok(())
    }
}

impl StdError for StorageError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
