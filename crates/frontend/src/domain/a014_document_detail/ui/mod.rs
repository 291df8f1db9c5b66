pub mod details;
pub mod list;

use contracts::domain::a014_document_detail::DocumentDetail;

use crate::shared::list_utils::Searchable;

impl Searchable for DocumentDetail {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.code.to_lowercase().contains(&filter)
            || self.prefix.to_lowercase().contains(&filter)
            || self
                .document_type_category
                .display_name()
                .to_lowercase()
                .contains(&filter)
    }
}
