//! Catalog loading
//!
//! A missing catalog file is not an error: it loads as an empty catalog.
//! Blank lines are ignored. What happens to a malformed line, including one
//! that is not valid UTF-8, is decided by `MalformedLinePolicy`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StorageError, StorageResult};
use super::record::{decode_line, LineError};
use crate::catalog::{Book, Catalog};
use crate::observability::{log_event_with_fields, Event, ObservationScope};

/// What to do with a line that does not decode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Fail the whole load with a parse error
    #[default]
    Abort,
    /// Drop the line, log a warning and keep going
    Skip,
}

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Books now in the catalog
    pub loaded: usize,
    /// Malformed lines dropped (always 0 under `Abort`)
    pub skipped: usize,
}

/// Line-oriented reader over a catalog file.
///
/// Tracks 1-based line numbers so errors can point at the offending line.
pub struct CatalogReader<R> {
    reader: R,
    line_number: u64,
    buf: Vec<u8>,
}

impl CatalogReader<BufReader<File>> {
    /// Opens the catalog file at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn open(path: &Path) -> StorageResult<Option<Self>> {
        match File::open(path) {
            Ok(file) => Ok(Some(Self::new(BufReader::new(file)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read_failed(
                format!("Failed to open catalog file: {}", path.display()),
                e,
            )),
        }
    }
}

impl<R: BufRead> CatalogReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Line number of the most recently read line (0 before the first read)
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Reads and decodes the next non-blank line.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` at end of input
    /// - `Ok(Some(Ok(book)))` for a well-formed line
    /// - `Ok(Some(Err(reason)))` for a malformed line, including invalid UTF-8
    /// - `Err(_)` if the underlying read fails
    pub fn read_next(&mut self) -> StorageResult<Option<Result<Book, LineError>>> {
        loop {
            self.buf.clear();
            let read = self.reader.read_until(b'\n', &mut self.buf).map_err(|e| {
                StorageError::read_failed(
                    format!("Failed to read catalog line {}", self.line_number + 1),
                    e,
                )
            })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line,
                Err(e) => {
                    return Ok(Some(Err(LineError::InvalidUtf8 {
                        valid_up_to: e.valid_up_to(),
                    })));
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(decode_line(line)));
        }
    }
}

/// Loads the catalog stored at `path`.
///
/// # Errors
///
/// - `SHELF_STORAGE_READ_FAILED` if the file exists but cannot be read
/// - `SHELF_STORAGE_PARSE_ERROR` for the first malformed line under
///   `MalformedLinePolicy::Abort`
pub fn load(path: &Path, policy: MalformedLinePolicy) -> StorageResult<(Catalog, LoadSummary)> {
    let path_str = path.display().to_string();
    let scope = ObservationScope::with_fields("CATALOG_LOAD", &[("path", path_str.as_str())]);

    let result = match CatalogReader::open(path) {
        Ok(Some(mut reader)) => load_from(&mut reader, policy),
        Ok(None) => Ok((Catalog::new(), LoadSummary::default())),
        Err(e) => Err(e),
    };

    match &result {
        Ok((_, summary)) => scope.complete_with_fields(&[
            ("loaded", summary.loaded.to_string().as_str()),
            ("skipped", summary.skipped.to_string().as_str()),
        ]),
        Err(e) => scope.fail(&e.to_string()),
    }
    result
}

/// Builds a catalog from every line of `reader`.
pub fn load_from<R: BufRead>(
    reader: &mut CatalogReader<R>,
    policy: MalformedLinePolicy,
) -> StorageResult<(Catalog, LoadSummary)> {
    let mut catalog = Catalog::new();
    let mut summary = LoadSummary::default();

    while let Some(decoded) = reader.read_next()? {
        let outcome = decoded.and_then(|book| {
            let id = book.id();
            catalog.insert(book).map_err(|_| LineError::DuplicateId(id))
        });

        if let Err(reason) = outcome {
            let line_number = reader.line_number();
            match policy {
                MalformedLinePolicy::Abort => {
                    return Err(StorageError::parse_error(line_number, reason));
                }
                MalformedLinePolicy::Skip => {
                    log_event_with_fields(
                        Event::LineSkipped,
                        &[
                            ("line", line_number.to_string().as_str()),
                            ("reason", reason.to_string().as_str()),
                        ],
                    );
                    summary.skipped += 1;
                }
            }
        }
    }

    summary.loaded = catalog.len();
    Ok((catalog, summary))
}
