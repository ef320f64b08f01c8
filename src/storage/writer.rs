//! Catalog saving
//!
//! `save` overwrites the whole file with the current catalog, one line per
//! book in ascending id order, and syncs it to disk before returning.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::errors::{StorageError, StorageResult};
use super::record::{contains_delimiter, encode_line};
use crate::catalog::{Book, Catalog};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

/// Line-oriented writer for catalog files.
pub struct CatalogWriter<W: Write> {
    writer: W,
    records_written: usize,
}

impl<W: Write> CatalogWriter<W> {
    /// Wrap any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Number of lines written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Writes one book as a line.
    ///
    /// A book whose title or author contains the field delimiter or a line
    /// break is still written, but a `DELIMITER_IN_FIELD` warning is logged
    /// since the line will not decode on the next load.
    pub fn write_book(&mut self, book: &Book) -> io::Result<()> {
        if contains_delimiter(book) {
            log_event_with_fields(
                Event::DelimiterInField,
                &[("id", book.id().to_string().as_str())],
            );
        }
        self.writer.write_all(encode_line(book).as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes every book in the catalog, ordered by id.
    pub fn write_catalog(&mut self, catalog: &Catalog) -> io::Result<()> {
        for book in catalog.sorted_by_id() {
            self.write_book(book)?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Saves the catalog to `path`, replacing any previous content.
///
/// Creates the parent directory if it does not exist.
///
/// # Returns
///
/// The number of books written.
///
/// # Errors
///
/// Returns `SHELF_STORAGE_WRITE_FAILED` if the file cannot be created,
/// written or synced.
pub fn save(path: &Path, catalog: &Catalog) -> StorageResult<usize> {
    let path_str = path.display().to_string();
    let scope = ObservationScope::with_fields("CATALOG_SAVE", &[("path", path_str.as_str())]);

    match write_file(path, catalog) {
        Ok(written) => {
            scope.complete_with_fields(&[("records", written.to_string().as_str())]);
            Ok(written)
        }
        Err(e) => {
            scope.fail(&e.to_string());
            Err(e)
        }
    }
}

fn write_file(path: &Path, catalog: &Catalog) -> StorageResult<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                StorageError::write_failed(
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        StorageError::write_failed(
            format!("Failed to create catalog file: {}", path.display()),
            e,
        )
    })?;

    let mut writer = CatalogWriter::new(BufWriter::new(file));
    writer.write_catalog(catalog).map_err(|e| {
        StorageError::write_failed(
            format!("Failed to write catalog file: {}", path.display()),
            e,
        )
    })?;
    let written = writer.records_written();

    let file = writer
        .finish()
        .map_err(|e| StorageError::write_failed("Failed to flush catalog file", e))?
        .into_inner()
        .map_err(|e| StorageError::write_failed("Failed to flush catalog file", e.into_error()))?;

    file.sync_all().map_err(|e| {
        StorageError::write_failed(
            format!("fsync failed for catalog file: {}", path.display()),
            e,
        )
    })?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::observability::capture::{capture_events, named};

    #[test]
    fn test_writes_lines_in_id_order() {
        let mut catalog = Catalog::new();
        catalog.add(2, "Dune Messiah", "Herbert", 2).unwrap();
        catalog.add(1, "Dune", "Herbert", 5).unwrap();

        let mut writer = CatalogWriter::new(Vec::new());
        writer.write_catalog(&catalog).unwrap();
        assert_eq!(writer.records_written(), 2);

        let bytes = writer.finish().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "1|Dune|Herbert|5\n2|Dune Messiah|Herbert|2\n"
        );
    }

    #[test]
    fn test_empty_catalog_writes_nothing() {
        let mut writer = CatalogWriter::new(Vec::new());
        writer.write_catalog(&Catalog::new()).unwrap();
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_delimiter_in_field_written_verbatim() {
        let mut writer = CatalogWriter::new(Vec::new());
        writer
            .write_book(&Book::new(1, "Either|Or", "Kierkegaard", 1))
            .unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(bytes, b"1|Either|Or|Kierkegaard|1\n");
    }

    #[test]
    fn test_delimiter_in_field_logs_warning() {
        let (_, events) = capture_events(|| {
            let mut writer = CatalogWriter::new(Vec::new());
            writer.write_book(&Book::new(1, "Dune", "Herbert", 5)).unwrap();
            writer
                .write_book(&Book::new(7, "Either|Or", "Kierkegaard", 1))
                .unwrap();
            writer.finish().unwrap()
        });

        let warnings: Vec<_> = named(&events, "DELIMITER_IN_FIELD").collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["severity"], "WARN");
        assert_eq!(warnings[0]["id"], "7");
    }

    #[test]
    fn test_line_break_in_field_logs_warning() {
        let (bytes, events) = capture_events(|| {
            let mut writer = CatalogWriter::new(Vec::new());
            writer
                .write_book(&Book::new(1, "Dune\n2|Ghost|Nobody|9", "Herbert", 5))
                .unwrap();
            writer.finish().unwrap()
        });

        assert_eq!(bytes, b"1|Dune\n2|Ghost|Nobody|9|Herbert|5\n");
        let warnings: Vec<_> = named(&events, "DELIMITER_IN_FIELD").collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["id"], "1");
    }

    #[test]
    fn test_save_logs_complete_with_record_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.txt");
        let mut catalog = Catalog::new();
        catalog.add(1, "Dune", "Herbert", 5).unwrap();

        let (result, events) = capture_events(|| save(&path, &catalog));
        assert_eq!(result.unwrap(), 1);

        assert_eq!(named(&events, "CATALOG_SAVE_BEGIN").count(), 1);
        let complete: Vec<_> = named(&events, "CATALOG_SAVE_COMPLETE").collect();
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0]["records"], "1");
    }

    #[test]
    fn test_save_logs_failed_when_path_is_a_directory() {
        let dir = TempDir::new().unwrap();

        let (result, events) = capture_events(|| save(dir.path(), &Catalog::new()));
        assert!(result.is_err());

        let failed: Vec<_> = named(&events, "CATALOG_SAVE_FAILED").collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0]["severity"], "ERROR");
        assert_eq!(named(&events, "CATALOG_SAVE_COMPLETE").count(), 0);
    }
}
