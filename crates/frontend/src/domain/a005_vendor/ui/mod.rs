pub mod details;
pub mod list;

use contracts::domain::a005_vendor::Vendor;

use crate::shared::list_utils::Searchable;

impl Searchable for Vendor {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.tin.contains(&filter)
            || self.rdo.contains(&filter)
            || self.contact_person.to_lowercase().contains(&filter)
            || self.email.to_lowercase().contains(&filter)
    }
}
