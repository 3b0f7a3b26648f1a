//! Record model representing one contact in the address book.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name is the record's key inside an [`AddressBook`](crate::book::AddressBook)
/// and cannot change after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: String,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a validated birthday.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let birthday = Birthday::new(birthday)?;
        Ok(Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: Some(birthday),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed.
    ///
    /// Removing a number the record does not have is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Overwrite the first phone equal to `old` with `new`.
    ///
    /// When no phone matches `old` nothing changes and `Ok(())` is returned.
    /// When one matches, `new` must be a valid phone number; on failure the
    /// old number stays in place.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> Result<(), ValidationError> {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            phone.set(new)?;
        }
        Ok(())
    }

    /// Validate and set the birthday. On error the previous birthday is kept.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `Some(0)` when `today` is the birthday. The count rolls over to
    /// next year only once this year's occurrence is strictly in the past.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.occurrence_in(today.year())?;
        if today > next {
            next = birthday.occurrence_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    /// Human-readable summary, with days to birthday counted from `today`.
    ///
    /// ```text
    /// Name: alice
    /// Phones:
    /// - 0501234567
    /// Birthday: 15.06.2000
    /// Days to birthday: 12
    /// ```
    ///
    /// The phone and birthday sections are omitted when empty.
    pub fn describe(&self, today: NaiveDate) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "Name: {}", self.name);

        if !self.phones.is_empty() {
            out.push_str("Phones:\n");
            for phone in &self.phones {
                let _ = writeln!(out, "- {}", phone);
            }
        }

        if let Some(ref birthday) = self.birthday {
            let _ = writeln!(out, "Birthday: {}", birthday);
            if let Some(days) = self.days_to_birthday(today) {
                let _ = writeln!(out, "Days to birthday: {}", days);
            }
        }

        out
    }

    /// Whether `needle` (already lowercased) occurs in the name or any phone.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.phones.iter().any(|p| p.as_str().contains(needle))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Local::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn phone_strings(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("alice");
        assert_eq!(record.name(), "alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_with_birthday() {
        let record = Record::with_birthday("alice", "15.06.2000").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "15.06.2000");

        assert!(Record::with_birthday("bob", "31.04.2023").is_err());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        record.add_phone("0501234567").unwrap();

        assert_eq!(
            phone_strings(&record),
            vec!["0501234567", "0679876543", "0501234567"]
        );
    }

    #[test]
    fn test_add_phone_invalid_leaves_phones_unchanged() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();

        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert_eq!(phone_strings(&record), vec!["0501234567"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        record.add_phone("0501234567").unwrap();

        assert_eq!(record.remove_phone("0501234567"), 2);
        assert_eq!(phone_strings(&record), vec!["0679876543"]);
    }

    #[test]
    fn test_remove_phone_no_match_is_noop() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();

        assert_eq!(record.remove_phone("1111111111"), 0);
        assert_eq!(phone_strings(&record), vec!["0501234567"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        record.add_phone("0501234567").unwrap();

        record.edit_phone("0501234567", "0931112233").unwrap();
        assert_eq!(
            phone_strings(&record),
            vec!["0931112233", "0679876543", "0501234567"]
        );
    }

    #[test]
    fn test_edit_phone_no_match_is_silent_noop() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        let before = record.phones().to_vec();

        assert!(record.edit_phone("1111111111", "0931112233").is_ok());
        assert_eq!(record.phones(), before.as_slice());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut record = Record::new("alice");
        record.add_phone("0501234567").unwrap();

        let result = record.edit_phone("0501234567", "bad");
        assert!(result.is_err());
        assert_eq!(phone_strings(&record), vec!["0501234567"]);
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut record = Record::with_birthday("alice", "15.06.2000").unwrap();
        assert!(record.set_birthday("29.02.2023").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "15.06.2000");

        record.clear_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("alice");
        assert_eq!(record.days_to_birthday(date(2024, 6, 15)), None);
    }

    #[test]
    fn test_days_to_birthday_on_the_day_is_zero() {
        let record = Record::with_birthday("alice", "15.06.2000").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 6, 15)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_rolls_over_after_the_day() {
        let record = Record::with_birthday("alice", "15.06.2000").unwrap();
        // 2024-06-16 -> 2025-06-15
        assert_eq!(record.days_to_birthday(date(2024, 6, 16)), Some(364));
        // 2023-06-16 -> 2024-06-15 spans 29 Feb 2024
        assert_eq!(record.days_to_birthday(date(2023, 6, 16)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let record = Record::with_birthday("alice", "15.06.2000").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 6, 1)), Some(14));
        assert_eq!(record.days_to_birthday(date(2024, 1, 1)), Some(166));
    }

    #[test]
    fn test_days_to_birthday_year_end() {
        let record = Record::with_birthday("alice", "01.01.1990").unwrap();
        assert_eq!(record.days_to_birthday(date(2024, 12, 31)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_leap_day_in_common_year() {
        let record = Record::with_birthday("alice", "29.02.2000").unwrap();
        assert_eq!(record.days_to_birthday(date(2025, 2, 28)), Some(0));
        assert_eq!(record.days_to_birthday(date(2024, 2, 29)), Some(0));
        // 2025-03-01 -> 2026-02-28
        assert_eq!(record.days_to_birthday(date(2025, 3, 1)), Some(364));
    }

    #[test]
    fn test_describe_full() {
        let mut record = Record::with_birthday("alice", "15.06.2000").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();

        let text = record.describe(date(2024, 6, 1));
        assert_eq!(
            text,
            "Name: alice\nPhones:\n- 0501234567\n- 0679876543\n\
             Birthday: 15.06.2000\nDays to birthday: 14\n"
        );
    }

    #[test]
    fn test_describe_omits_missing_sections() {
        let record = Record::new("bob");
        assert_eq!(record.describe(date(2024, 6, 1)), "Name: bob\n");
    }

    #[test]
    fn test_display_includes_name() {
        let record = Record::new("bob");
        assert_eq!(record.to_string(), "Name: bob\n");
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let mut record = Record::new("Alice Smith");
        record.add_phone("0501234567").unwrap();

        assert!(record.matches("alice"));
        assert!(record.matches("smith"));
        assert!(record.matches("1234"));
        assert!(record.matches(""));
        assert!(!record.matches("bob"));
    }

    #[test]
    fn test_record_serialization_skips_absent_birthday() {
        let record = Record::new("bob");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"bob","phones":[]}"#);

        let parsed: Record = serde_json::from_str(r#"{"name":"bob"}"#).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"bob","phones":["123"]}"#);
        assert!(result.is_err());
    }
}
