pub mod details;
pub mod list;

use contracts::domain::a002_bank::Bank;

use crate::shared::list_utils::Searchable;

impl Searchable for Bank {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.branch.to_lowercase().contains(&filter)
            || self.account_no.to_lowercase().contains(&filter)
            || self.account_name.to_lowercase().contains(&filter)
    }
}
