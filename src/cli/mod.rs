//! Interactive prompt for the contact book.
//!
//! [`Command`] turns a line of text into a request; [`Dispatcher`] runs it
//! against an address book owned by the caller.

pub mod command;
pub mod dispatcher;

pub use command::{Command, PhoneEdit};
pub use dispatcher::{Dispatcher, Flow};
