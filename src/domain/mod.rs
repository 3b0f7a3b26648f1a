//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! phone numbers and birthdays. These value objects validate at construction
//! and on every mutation, so invalid data cannot be represented in the system.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
