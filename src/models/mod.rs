//! Data models for the contact book.
//!
//! A [`Record`] is the aggregate for one contact: a name, its phone numbers
//! and an optional birthday.

pub mod record;

pub use record::Record;
