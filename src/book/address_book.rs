//! The address book: an insertion-ordered collection of records keyed by name.

use super::pages::Pages;
use crate::domain::ValidationError;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Owns every record it holds, keyed by the record's name.
///
/// Iteration, search results and pages follow insertion order. Re-adding a
/// name replaces the old record in its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an address book from a file written by [`save_to_file`](Self::save_to_file).
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        let mut book = Self::new();
        book.load_from_file(path)?;
        Ok(book)
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name, record).is_some() {
            debug!("Replaced existing record");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to a record. The name cannot be changed through it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record called `name`, keeping the order of the rest.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose name or any phone contains `term`, ignoring case.
    ///
    /// An empty term matches every record.
    pub fn search_records(&self, term: &str) -> Vec<&Record> {
        let needle = term.to_lowercase();
        self.records
            .values()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    /// Split the current records into pages of at most `page_size`.
    ///
    /// The returned iterator works on a snapshot taken now: it does not see
    /// later changes and cannot be restarted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` if `page_size` is zero.
    pub fn iterate_pages(&self, page_size: usize) -> Result<Pages, ValidationError> {
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize(page_size));
        }
        let snapshot: Vec<Record> = self.records.values().cloned().collect();
        Ok(Pages::new(snapshot, page_size))
    }

    /// Write every record to `path`, replacing whatever the file held.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();
        let io_err = |source| BookError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.records).map_err(|e| {
            BookError::Io {
                path: path.to_path_buf(),
                source: e.into(),
            }
        })?;
        writer.flush().map_err(io_err)?;

        info!("Saved {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Replace the whole book with the contents of `path`.
    ///
    /// Nothing is merged: records not in the file are gone afterwards. If
    /// loading fails the book is left as it was.
    ///
    /// # Errors
    ///
    /// - `BookError::Io` if the file is missing or unreadable
    /// - `BookError::Format` if the contents are not a valid address book
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: IndexMap<String, Record> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                if e.is_io() {
                    BookError::Io {
                        path: path.to_path_buf(),
                        source: e.into(),
                    }
                } else {
                    BookError::Format {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }
                }
            })?;

        if let Some((key, record)) = records.iter().find(|(key, r)| key.as_str() != r.name()) {
            return Err(BookError::Format {
                path: path.to_path_buf(),
                reason: format!(
                    "entry '{}' holds a record named '{}'",
                    key,
                    record.name()
                ),
            });
        }

        self.records = records;
        info!("Loaded {} records from {}", self.records.len(), path.display());
        Ok(())
    }
}
