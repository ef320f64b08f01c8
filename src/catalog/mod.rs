//! Book catalog for shelfdb
//!
//! The catalog is the in-memory record store: a map from book id to book,
//! with existence-checked add/update/delete and a linear title search.
//!
//! # Invariants
//!
//! - No two books share an id
//! - A book's id never changes after it is added
//! - A failed operation leaves the catalog unchanged

mod book;
mod errors;
mod store;

pub use book::{Book, BookId};
pub use errors::{CatalogError, CatalogResult};
pub use store::Catalog;
