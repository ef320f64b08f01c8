//! Catalog Invariant Tests
//!
//! - Ids are unique; a rejected add leaves the catalog unchanged
//! - Lookups return exactly what was stored
//! - Updates touch only the quantity
//! - Title search returns exactly the books whose title contains the key

use std::collections::HashSet;

use proptest::prelude::*;
use shelfdb::catalog::{Book, BookId, Catalog, CatalogError};

// =============================================================================
// Test Utilities
// =============================================================================

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(1, "Dune", "Herbert", 5).unwrap();
    catalog.add(2, "Dune Messiah", "Herbert", 2).unwrap();
    catalog.add(3, "Children of Dune", "Herbert", 0).unwrap();
    catalog.add(4, "Emma", "Austen", 7).unwrap();
    catalog
}

fn sorted_ids<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<BookId> {
    let mut ids: Vec<BookId> = books.map(Book::id).collect();
    ids.sort();
    ids
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_duplicate_add_rejected_and_catalog_unchanged() {
    let mut catalog = sample_catalog();
    let before: Vec<Book> = catalog.sorted_by_id().into_iter().cloned().collect();

    let result = catalog.add(2, "Replacement", "Nobody", 99);

    assert_eq!(result, Err(CatalogError::DuplicateId(2)));
    let after: Vec<Book> = catalog.sorted_by_id().into_iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_id_reusable_after_delete() {
    let mut catalog = sample_catalog();
    catalog.delete(4).unwrap();
    catalog.add(4, "Persuasion", "Austen", 1).unwrap();
    assert_eq!(catalog.find_by_id(4).unwrap().title, "Persuasion");
}

// =============================================================================
// Lookups, updates and deletes
// =============================================================================

#[test]
fn test_delete_then_find_returns_none() {
    let mut catalog = sample_catalog();
    catalog.delete(3).unwrap();
    assert!(catalog.find_by_id(3).is_none());
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_update_changes_only_quantity() {
    let mut catalog = sample_catalog();
    catalog.update_quantity(4, 0).unwrap();
    assert_eq!(catalog.find_by_id(4), Some(&Book::new(4, "Emma", "Austen", 0)));
}

#[test]
fn test_missing_id_operations_fail_with_not_found() {
    let mut catalog = sample_catalog();
    assert_eq!(catalog.update_quantity(99, 1), Err(CatalogError::NotFound(99)));
    assert_eq!(catalog.delete(99), Err(CatalogError::NotFound(99)));
    assert_eq!(catalog.len(), 4);
}

// =============================================================================
// Title search
// =============================================================================

#[test]
fn test_empty_key_returns_all() {
    let catalog = sample_catalog();
    assert_eq!(sorted_ids(catalog.find_by_title_substring("")), vec![1, 2, 3, 4]);
    assert_eq!(sorted_ids(catalog.all()), vec![1, 2, 3, 4]);
}

#[test]
fn test_search_matches_anywhere_in_title() {
    let catalog = sample_catalog();
    assert_eq!(sorted_ids(catalog.find_by_title_substring("Dune")), vec![1, 2, 3]);
    assert_eq!(sorted_ids(catalog.find_by_title_substring("of ")), vec![3]);
    assert!(sorted_ids(catalog.find_by_title_substring("Herbert")).is_empty());
}

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_dune_scenario() {
    let mut catalog = Catalog::new();
    catalog.add(1, "Dune", "Herbert", 5).unwrap();
    catalog.add(2, "Dune Messiah", "Herbert", 2).unwrap();

    assert_eq!(sorted_ids(catalog.find_by_title_substring("Dune")), vec![1, 2]);
    assert_eq!(catalog.find_by_id(1).unwrap().quantity, 5);

    catalog.update_quantity(1, 10).unwrap();
    assert_eq!(catalog.find_by_id(1).unwrap().quantity, 10);

    catalog.delete(2).unwrap();
    assert!(catalog.find_by_id(2).is_none());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_distinct_ids_round_trip_through_add_and_find(
        ids in proptest::collection::hash_set(any::<i64>(), 0..64),
        quantity in any::<u32>(),
    ) {
        let mut catalog = Catalog::new();
        for id in &ids {
            catalog.add(*id, format!("Title {}", id), "Author", quantity).unwrap();
        }

        prop_assert_eq!(catalog.len(), ids.len());
        for id in &ids {
            let expected = Book::new(*id, format!("Title {}", id), "Author", quantity);
            prop_assert_eq!(catalog.find_by_id(*id), Some(&expected));
        }
    }

    #[test]
    fn prop_search_returns_exactly_matching_titles(
        titles in proptest::collection::vec("[ab]{0,4}", 0..16),
        key in "[ab]{0,2}",
    ) {
        let mut catalog = Catalog::new();
        for (id, title) in titles.iter().enumerate() {
            catalog.add(id as BookId, title.clone(), "A", 1).unwrap();
        }

        let found: HashSet<BookId> =
            catalog.find_by_title_substring(&key).map(Book::id).collect();
        let expected: HashSet<BookId> = titles
            .iter()
            .enumerate()
            .filter(|(_, title)| title.contains(key.as_str()))
            .map(|(id, _)| id as BookId)
            .collect();

        prop_assert_eq!(found, expected);
    }
}
