//! Catalog actions shared by the menu and the one-shot commands
//!
//! Each action performs one catalog operation and writes the user-facing
//! result. Rejected operations come back as `CliErrorCode::CatalogError`;
//! the caller decides whether that ends the process.

use std::io::Write;

use super::errors::CliResult;
use crate::catalog::{Book, BookId, Catalog};
use crate::observability::{log_event_with_fields, Event};

pub const MSG_ADDED: &str = "Book added successfully.";
pub const MSG_NOT_FOUND: &str = "Book not found.";
pub const MSG_NO_MATCHES: &str = "No matching books.";
pub const MSG_EMPTY: &str = "No books available.";
pub const MSG_UPDATED: &str = "Quantity updated successfully.";
pub const MSG_DELETED: &str = "Book deleted successfully.";

fn write_books<'a, W: Write>(
    out: &mut W,
    books: impl IntoIterator<Item = &'a Book>,
) -> CliResult<usize> {
    let mut count = 0;
    for book in books {
        writeln!(out, "{}", book)?;
        count += 1;
    }
    Ok(count)
}

pub fn add_book<W: Write>(
    catalog: &mut Catalog,
    out: &mut W,
    id: BookId,
    title: &str,
    author: &str,
    quantity: u32,
) -> CliResult<()> {
    catalog.add(id, title, author, quantity)?;
    log_event_with_fields(Event::BookAdded, &[("id", id.to_string().as_str())]);
    writeln!(out, "{}", MSG_ADDED)?;
    Ok(())
}

pub fn show_book<W: Write>(catalog: &Catalog, out: &mut W, id: BookId) -> CliResult<()> {
    match catalog.find_by_id(id) {
        Some(book) => writeln!(out, "{}", book)?,
        None => writeln!(out, "{}", MSG_NOT_FOUND)?,
    }
    Ok(())
}

/// Matches are listed by ascending id.
pub fn search_title<W: Write>(catalog: &Catalog, out: &mut W, key: &str) -> CliResult<()> {
    let mut matches: Vec<&Book> = catalog.find_by_title_substring(key).collect();
    matches.sort_by_key(|book| book.id());

    if write_books(out, matches)? == 0 {
        writeln!(out, "{}", MSG_NO_MATCHES)?;
    }
    Ok(())
}

pub fn list_books<W: Write>(catalog: &Catalog, out: &mut W) -> CliResult<()> {
    if write_books(out, catalog.sorted_by_id())? == 0 {
        writeln!(out, "{}", MSG_EMPTY)?;
    }
    Ok(())
}

pub fn update_quantity<W: Write>(
    catalog: &mut Catalog,
    out: &mut W,
    id: BookId,
    quantity: u32,
) -> CliResult<()> {
    catalog.update_quantity(id, quantity)?;
    log_event_with_fields(
        Event::BookUpdated,
        &[
            ("id", id.to_string().as_str()),
            ("quantity", quantity.to_string().as_str()),
        ],
    );
    writeln!(out, "{}", MSG_UPDATED)?;
    Ok(())
}

pub fn delete_book<W: Write>(catalog: &mut Catalog, out: &mut W, id: BookId) -> CliResult<()> {
    catalog.delete(id)?;
    log_event_with_fields(Event::BookDeleted, &[("id", id.to_string().as_str())]);
    writeln!(out, "{}", MSG_DELETED)?;
    Ok(())
}
