pub mod details;
pub mod list;

use contracts::system::user_access::UserAccess;

use crate::shared::list_utils::Searchable;

impl Searchable for UserAccess {
    fn matches_filter(&self, filter: &str) -> bool {
        self.user_name.to_lowercase().contains(&filter.to_lowercase())
    }
}
