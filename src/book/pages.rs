//! Paginated iteration over an address book snapshot.

use crate::models::Record;
use std::iter::FusedIterator;

/// Iterator over consecutive pages of records.
///
/// The records are copied when the iterator is created, so later changes to
/// the address book are not reflected. Once exhausted it stays exhausted;
/// call [`AddressBook::iterate_pages`](crate::book::AddressBook::iterate_pages)
/// again to start over from a fresh snapshot.
#[derive(Debug, Clone)]
pub struct Pages {
    records: std::vec::IntoIter<Record>,
    page_size: usize,
}

impl Pages {
    /// `page_size` must be non-zero; the address book checks this.
    pub(crate) fn new(snapshot: Vec<Record>, page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            records: snapshot.into_iter(),
            page_size,
        }
    }
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages {}

impl FusedIterator for Pages {}
