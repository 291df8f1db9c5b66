use contracts::domain::a010_region::{Region, RegionDraft};
use contracts::shared::FieldErrors;

use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for Region {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl ReferenceEntity for Region {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[("Name", "Name")];

    fn fields() -> Vec<FieldSpec> {
        vec![FieldSpec::text("Name", "Name").required()]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new().with("Name", self.name.as_str())
    }

    fn draft_from(values: &FormValues) -> RegionDraft {
        RegionDraft {
            name: values.get("Name"),
        }
    }

    fn validate(draft: &RegionDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: RegionDraft) -> Region {
        draft.into_record(id)
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "Name" => self.name.clone(),
            _ => String::new(),
        }
    }
}
