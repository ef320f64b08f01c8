//! Catalog error types
//!
//! Catalog errors are never fatal: they are reported to the caller and the
//! catalog is left unchanged.

use thiserror::Error;

use super::book::BookId;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Book ID already exists: {0}")]
    DuplicateId(BookId),

    #[error("Book ID not found: {0}")]
    NotFound(BookId),
}

impl CatalogError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateId(_) => "SHELF_CATALOG_DUPLICATE_ID",
            CatalogError::NotFound(_) => "SHELF_CATALOG_NOT_FOUND",
        }
    }

    /// Returns the id the failed operation referenced
    pub fn book_id(&self) -> BookId {
        match self {
            CatalogError::DuplicateId(id) | CatalogError::NotFound(id) => *id,
        }
    }
}
