pub mod details;
pub mod list;

use contracts::domain::a011_province::Province;

use crate::shared::list_utils::Searchable;

impl Searchable for Province {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}
