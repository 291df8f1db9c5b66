use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field-keyed validation failures. Keys are wire field names so forms can
/// attach each message to its input; iteration order is stable for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins so
    /// a required-check failure is not overwritten by format checks.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// Collects validation failures for one submission. Checks never short-
/// circuit: a form shows everything wrong with it at once.
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            errors: FieldErrors::new(),
        }
    }

    pub fn require(&mut self, field: &str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.errors.add(field, format!("{} is required", label));
        }
    }

    pub fn require_selected<T>(&mut self, field: &str, value: Option<T>, label: &str) {
        if value.is_none() {
            self.errors.add(field, format!("{} is required", label));
        }
    }

    /// Digit-only check, skipped when the value is blank. `lengths` lists
    /// the accepted digit counts (the TIN rule is 9 or 12).
    pub fn digits(&mut self, field: &str, value: &str, lengths: &[usize], label: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        let all_digits = trimmed.chars().all(|c| c.is_ascii_digit());
        if !all_digits || !lengths.contains(&trimmed.len()) {
            let expected = lengths
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" or ");
            self.errors
                .add(field, format!("{} must be {} digits", label, expected));
        }
    }

    pub fn min(&mut self, field: &str, value: i64, min: i64, label: &str) {
        if value < min {
            self.errors
                .add(field, format!("{} must be at least {}", label, min));
        }
    }

    /// Parses a `YYYY-MM-DD` wire date. Blank values and parse failures
    /// both return `None`; only parse failures record an error.
    pub fn date(&mut self, field: &str, value: &str, label: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.errors
                    .add(field, format!("{} is not a valid date", label));
                None
            }
        }
    }

    pub fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.errors.add(field, message);
        }
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_blank_and_whitespace() {
        let mut v = Validator::new();
        v.require("Name", "", "Name");
        v.require("Branch", "   ", "Branch");
        v.require("Code", "GF", "Code");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("Name"), Some("Name is required"));
        assert!(errors.get("Code").is_none());
    }

    #[test]
    fn digits_accepts_listed_lengths_only() {
        let mut v = Validator::new();
        v.digits("TIN", "123456789", &[9, 12], "TIN");
        v.digits("RDO", "04A", &[3], "RDO code");
        v.digits("Other", "", &[3], "Other");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("RDO"), Some("RDO code must be 3 digits"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut v = Validator::new();
        v.require("TIN", "", "TIN");
        v.digits("TIN", "", &[9, 12], "TIN");
        v.check("TIN", false, "TIN looks wrong");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.get("TIN"), Some("TIN is required"));
    }

    #[test]
    fn date_parses_wire_format() {
        let mut v = Validator::new();
        let from = v.date("DateFrom", "2026-02-17", "Departure date");
        let to = v.date("DateTo", "17/02/2026", "Return date");
        assert_eq!(from, Some(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()));
        assert_eq!(to, None);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.get("DateTo"), Some("Return date is not a valid date"));
        assert!(errors.get("DateFrom").is_none());
    }

    #[test]
    fn display_joins_messages_in_field_order() {
        let mut v = Validator::new();
        v.require("Name", "", "Name");
        v.require("AccountNo", "", "Account number");
        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Account number is required; Name is required"
        );
    }
}
