//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on an address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// File missing, unreadable or unwritable
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but does not hold a valid address book
    #[error("Corrupt address book file {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },
}

/// Errors produced while parsing or executing a prompt command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Invalid command '{0}'. Type 'hello' for assistance.")]
    UnknownCommand(String),

    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// An argument could not be understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No record with the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// A phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Saving or loading failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
