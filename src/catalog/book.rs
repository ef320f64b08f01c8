//! Book record type
//!
//! A book is identified by its `BookId`, which never changes after creation.
//! Only the quantity is mutable once a book is in the catalog.

use std::fmt;

/// Catalog-wide unique book identifier
pub type BookId = i64;

/// A single book as held by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    /// Book title (free text, searched by substring)
    pub title: String,
    /// Book author (free text)
    pub author: String,
    /// Copies on hand
    pub quantity: u32,
}

impl Book {
    /// Create a new book record
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Returns the book id
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns true if the title contains `key` (case-sensitive).
    pub fn title_contains(&self, key: &str) -> bool {
        self.title.contains(key)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {} | Title: {} | Author: {} | Quantity: {}",
            self.id, self.title, self.author, self.quantity
        )
    }
}
