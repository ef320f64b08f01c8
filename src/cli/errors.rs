//! CLI-specific error types
//!
//! CLI errors end the process: `main` prints them to stderr and exits with
//! status 1. Catalog errors are the exception inside the menu, where they are
//! shown to the user and the session continues.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Catalog file could not be loaded
    LoadFailed,
    /// Catalog file could not be saved
    SaveFailed,
    /// A catalog operation was rejected
    CatalogError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SHELF_CLI_CONFIG_ERROR",
            Self::IoError => "SHELF_CLI_IO_ERROR",
            Self::LoadFailed => "SHELF_CLI_LOAD_FAILED",
            Self::SaveFailed => "SHELF_CLI_SAVE_FAILED",
            Self::CatalogError => "SHELF_CLI_CATALOG_ERROR",
        }
    }
}

#[derive(Debug)]
enum Source {
    Catalog(CatalogError),
    Storage(StorageError),
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    source: Option<Source>,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Loading the catalog failed
    pub fn load_failed(err: StorageError) -> Self {
        Self {
            code: CliErrorCode::LoadFailed,
            message: format!("Failed to load catalog: {}", err),
            source: Some(Source::Storage(err)),
        }
    }

    /// Saving the catalog failed
    pub fn save_failed(err: StorageError) -> Self {
        Self {
            code: CliErrorCode::SaveFailed,
            message: format!("Failed to save catalog: {}", err),
            source: Some(Source::Storage(err)),
        }
    }

    /// A catalog operation was rejected
    pub fn catalog(err: CatalogError) -> Self {
        Self {
            code: CliErrorCode::CatalogError,
            message: err.to_string(),
            source: Some(Source::Catalog(err)),
        }
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rejected catalog operation, if that is what this error wraps
    pub fn catalog_error(&self) -> Option<&CatalogError> {
        match &self.source {
            Some(Source::Catalog(e)) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.source {
            Some(Source::Catalog(e)) => Some(e as &(dyn StdError + 'static)),
            Some(Source::Storage(e)) => Some(e as &(dyn StdError + 'static)),
            None => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::catalog(e)
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LineError;

    #[test]
    fn test_display_has_code_and_message() {
        let err = CliError::config_error("data_file must not be empty");
        assert_eq!(
            err.to_string(),
            "SHELF_CLI_CONFIG_ERROR: data_file must not be empty"
        );
    }

    #[test]
    fn test_catalog_error_is_recoverable_marker() {
        let err = CliError::from(CatalogError::NotFound(4));
        assert_eq!(err.code(), CliErrorCode::CatalogError);
        assert_eq!(err.catalog_error(), Some(&CatalogError::NotFound(4)));
        assert_eq!(err.message(), "Book ID not found: 4");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_failed_wraps_storage_error() {
        let err = CliError::load_failed(StorageError::parse_error(
            2,
            LineError::InvalidId("x".into()),
        ));
        assert_eq!(err.code_str(), "SHELF_CLI_LOAD_FAILED");
        assert!(err.message().contains("line: 2"));
        assert!(err.catalog_error().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.code(), CliErrorCode::IoError);
        assert!(err.message().contains("pipe closed"));
    }
}
