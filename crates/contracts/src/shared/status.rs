use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle flag for master-data records. Inactive records stay on the
/// server for referential integrity but are excluded from pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }

    pub fn parse(value: &str) -> RecordStatus {
        match value {
            "Inactive" => RecordStatus::Inactive,
            _ => RecordStatus::Active,
        }
    }

    pub fn all() -> [RecordStatus; 2] {
        [RecordStatus::Active, RecordStatus::Inactive]
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
