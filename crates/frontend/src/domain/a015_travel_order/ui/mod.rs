pub mod details;
pub mod list;

use contracts::domain::a015_travel_order::TravelOrder;

use crate::shared::list_utils::Searchable;

impl Searchable for TravelOrder {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.document_no.to_lowercase().contains(&filter)
            || self.employee_name.to_lowercase().contains(&filter)
            || self.destination.to_lowercase().contains(&filter)
            || self.purpose.to_lowercase().contains(&filter)
    }
}
