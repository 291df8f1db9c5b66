use contracts::domain::a008_payment_terms::{PaymentTerms, PaymentTermsDraft};
use contracts::shared::FieldErrors;

use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for PaymentTerms {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

impl ReferenceEntity for PaymentTerms {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Name", "Name"),
        ("Days", "Days"),
        ("Description", "Description"),
    ];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Name", "Name").required(),
            FieldSpec::text("Days", "Days").required(),
            FieldSpec::textarea("Description", "Description"),
        ]
    }

    fn default_values() -> FormValues {
        FormValues::new().with("Days", "0")
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("Name", self.name.as_str())
            .with("Days", self.days.to_string())
            .with("Description", self.description.as_str())
    }

    fn draft_from(values: &FormValues) -> PaymentTermsDraft {
        PaymentTermsDraft {
            name: values.get("Name"),
            days: values.parse_i32("Days").unwrap_or(-1),
            description: values.get("Description"),
        }
    }

    fn validate(draft: &PaymentTermsDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: PaymentTermsDraft) -> PaymentTerms {
        draft.into_record(id)
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "Name" => self.name.clone(),
            "Days" => self.days.to_string(),
            "Description" => self.description.clone(),
            _ => String::new(),
        }
    }
}
