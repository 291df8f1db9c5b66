pub mod details;
pub mod list;

use contracts::domain::a013_barangay::Barangay;

use crate::shared::list_utils::Searchable;

impl Searchable for Barangay {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}
