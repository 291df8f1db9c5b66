pub mod details;
pub mod list;

use contracts::domain::a004_customer::Customer;

use crate::shared::list_utils::Searchable;

impl Searchable for Customer {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.tin.contains(&filter)
            || self.contact_person.to_lowercase().contains(&filter)
            || self.contact_no.contains(&filter)
            || self.email.to_lowercase().contains(&filter)
    }
}
