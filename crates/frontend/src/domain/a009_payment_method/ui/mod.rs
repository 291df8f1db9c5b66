use contracts::domain::a009_payment_method::{PaymentMethod, PaymentMethodDraft};
use contracts::shared::FieldErrors;

use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for PaymentMethod {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

impl ReferenceEntity for PaymentMethod {
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

    fn draft_from(values: &FormValues) -> PaymentMethodDraft {
        PaymentMethodDraft {
            name: values.get("Name"),
            description: values.get("Description"),
        }
    }

    fn validate(draft: &PaymentMethodDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: PaymentMethodDraft) -> PaymentMethod {
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
