use contracts::domain::a006_vendor_type::{VendorType, VendorTypeDraft};
use contracts::shared::FieldErrors;

use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for VendorType {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

impl ReferenceEntity for VendorType {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Name", "Name"), ("Description", "Description")];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Name", "Name").required(),
            FieldSpec::textarea("Description", "Description"),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("Name", self.name.as_str())
            .with("Description", self.description.as_str())
    }

    fn draft_from(values: &FormValues) -> VendorTypeDraft {
        VendorTypeDraft {
            name: values.get("Name"),
            description: values.get("Description"),
        }
    }

    fn validate(draft: &VendorTypeDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: VendorTypeDraft) -> VendorType {
        draft.into_record(id)
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "Name" => self.name.clone(),
            "Description" => self.description.clone(),
            _ => String::new(),
        }
    }
}
