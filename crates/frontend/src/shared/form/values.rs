use std::collections::BTreeMap;

/// String-keyed working copy of a form. Everything is edited as text and
/// parsed once on save; checkboxes store "true"/"false".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }

    pub fn set_flag(&mut self, key: &str, on: bool) {
        self.set(key, if on { "true" } else { "false" });
    }

    /// Parses a select value; the empty "not chosen" option reads as
    /// `None`, as does anything non-numeric.
    pub fn parse_i32(&self, key: &str) -> Option<i32> {
        self.get(key).trim().parse().ok()
    }

    pub fn parse_i64_or(&self, key: &str, fallback: i64) -> i64 {
        self.get(key).trim().parse().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_empty() {
        let values = FormValues::new();
        assert_eq!(values.get("Name"), "");
        assert!(!values.flag("CanView"));
        assert_eq!(values.parse_i32("FundID"), None);
    }

    #[test]
    fn select_values_parse_to_ids() {
        let values = FormValues::new().with("FundID", "3").with("Days", "abc");
        assert_eq!(values.parse_i32("FundID"), Some(3));
        assert_eq!(values.parse_i32("Days"), None);
        assert_eq!(values.parse_i64_or("Days", 1), 1);
    }
}
