//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `dd.mm.yyyy` form.
    InvalidBirthday(String),

    /// A page size of zero was requested.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Invalid birthday format: {} (please use dd.mm.yyyy)",
                birthday
            ),
            Self::InvalidPageSize(size) => {
                write!(f, "Page size must be a positive integer, got: {}", size)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
