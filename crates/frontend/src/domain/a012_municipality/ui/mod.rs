pub mod details;
pub mod list;

use contracts::domain::a012_municipality::Municipality;

use crate::shared::list_utils::Searchable;

impl Searchable for Municipality {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}
