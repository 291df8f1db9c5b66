use contracts::domain::a003_currency::{Currency, CurrencyDraft};
use contracts::shared::FieldErrors;

use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for Currency {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.code.to_lowercase().contains(&filter) || self.name.to_lowercase().contains(&filter)
    }
}

impl ReferenceEntity for Currency {
    const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("Code", "Code"), ("Name", "Name")];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Code", "Code").required(),
            FieldSpec::text("Name", "Name").required(),
        ]
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("Code", self.code.as_str())
            .with("Name", self.name.as_str())
    }

    fn draft_from(values: &FormValues) -> CurrencyDraft {
        CurrencyDraft {
            code: values.get("Code"),
            name: values.get("Name"),
        }
    }

    fn validate(draft: &CurrencyDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: CurrencyDraft) -> Currency {
        draft.into_record(id)
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "Code" => self.code.clone(),
            "Name" => self.name.clone(),
            _ => String::new(),
        }
    }
}
