//! In-memory book catalog
//!
//! The catalog exclusively owns every book. Lookups hand out borrows that are
//! only valid until the next mutation. Title search is a linear scan.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::book::{Book, BookId};
use super::errors::{CatalogError, CatalogResult};

/// The book catalog, keyed by `BookId`.
///
/// No two books share an id. Iteration order of `all` and
/// `find_by_title_substring` is unspecified; use `sorted_by_id` when a stable
/// order is needed.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: HashMap<BookId, Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new book.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if a book with `id` is already
    /// present. The catalog is unchanged in that case.
    pub fn add(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> CatalogResult<()> {
        self.insert(Book::new(id, title, author, quantity))
    }

    /// Adds an already constructed book. Same semantics as `add`.
    pub fn insert(&mut self, book: Book) -> CatalogResult<()> {
        match self.books.entry(book.id()) {
            Entry::Occupied(_) => {
                Err(CatalogError::DuplicateId(book.id()))
            }
            Entry::Vacant(slot) => {
                slot.insert(book);
                Ok(())
            }
        }
    }

    /// Looks up a book by id.
    pub fn find_by_id(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Returns every book whose title contains `key`.
    ///
    /// Matching is a case-sensitive substring check; an empty key matches all
    /// books.
    pub fn find_by_title_substring<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a Book> + 'a {
        self.books.values().filter(move |book| book.title_contains(key))
    }

    /// Overwrites the quantity of an existing book.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no book has `id`.
    pub fn update_quantity(&mut self, id: BookId, quantity: u32) -> CatalogResult<()> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        book.quantity = quantity;
        Ok(())
    }

    /// Removes a book and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no book has `id`.
    pub fn delete(&mut self, id: BookId) -> CatalogResult<Book> {
        self.books.remove(&id).ok_or(CatalogError::NotFound(id))
    }

    /// Returns all books in unspecified order.
    pub fn all(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Returns all books ordered by ascending id.
    pub fn sorted_by_id(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.values().collect();
        books.sort_by_key(|book| book.id());
        books
    }

    /// Returns true if a book with `id` exists
    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
