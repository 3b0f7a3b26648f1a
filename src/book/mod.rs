//! Address book container.
//!
//! [`AddressBook`] owns the records, answers searches, hands out page
//! iterators and saves itself to or loads itself from a JSON file.

mod address_book;
mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
