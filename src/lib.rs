//! Contact Book - a command-line contact manager.
//!
//! Stores named records with validated phone numbers and birthdays, and
//! supports searching, paginated listing and saving to / loading from disk.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `Birthday`)
//! - **models**: The `Record` aggregate for one contact
//! - **book**: The `AddressBook` container with search, pages and persistence
//! - **error**: Error types for book, command and configuration failures
//! - **config**: Configuration from environment variables (binary only)
//! - **cli**: Command parsing and the interactive prompt loop

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use cli::{Command, Dispatcher};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::Record;
