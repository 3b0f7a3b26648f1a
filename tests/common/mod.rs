//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and address books.

use contact_book::{AddressBook, Record};

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = match birthday {
        Some(birthday) => Record::with_birthday(name, birthday).expect("valid fixture birthday"),
        None => Record::new(name),
    };
    for phone in phones {
        record.add_phone(*phone).expect("valid fixture phone");
    }
    record
}

/// Two contacts: one with a birthday and three phones, one with neither.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "Alice",
        &["0501234567", "0679876543", "0931112233"],
        Some("15.06.2000"),
    ));
    book.add_record(sample_record("Bob", &[], None));
    book
}

/// `count` contacts named `contact00`, `contact01`, ... each with one phone.
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        let phone = format!("{:010}", i);
        book.add_record(sample_record(&format!("contact{:02}", i), &[&phone], None));
    }
    book
}

/// Names of `records`, in order.
#[allow(dead_code)]
pub fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records.into_iter().map(|r| r.name().to_string()).collect()
}
