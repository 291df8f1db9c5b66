use contracts::domain::a001_fund::{Fund, FundDraft};
use contracts::shared::{FieldErrors, RecordStatus};

use crate::shared::form::{status_options, FieldSpec, FormValues};
use crate::shared::list_utils::Searchable;
use crate::shared::reference_page::ReferenceEntity;

impl Searchable for Fund {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.code.to_lowercase().contains(&filter)
            || self.name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

impl ReferenceEntity for Fund {
    const COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("Code", "Code"),
        ("Name", "Name"),
        ("Description", "Description"),
        ("Status", "Status"),
    ];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Code", "Code").required(),
            FieldSpec::text("Name", "Name").required(),
            FieldSpec::textarea("Description", "Description"),
            FieldSpec::select("Status", "Status", status_options()),
        ]
    }

    fn default_values() -> FormValues {
        FormValues::new().with("Status", RecordStatus::Active.as_str())
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with("Code", self.code.as_str())
            .with("Name", self.name.as_str())
            .with("Description", self.description.as_str())
            .with("Status", self.status.as_str())
    }

    fn draft_from(values: &FormValues) -> FundDraft {
        FundDraft {
            code: values.get("Code"),
            name: values.get("Name"),
            description: values.get("Description"),
            status: RecordStatus::parse(&values.get("Status")),
        }
    }

    fn validate(draft: &FundDraft) -> Result<(), FieldErrors> {
        draft.validate()
    }

    fn with_id(id: i32, draft: FundDraft) -> Fund {
        draft.into_record(id)
    }

    fn cell(&self, key: &str) -> String {
        match key {
            "Code" => self.code.clone(),
            "Name" => self.name.clone(),
            "Description" => self.description.clone(),
            "Status" => self.status.as_str().to_string(),
            _ => String::new(),
        }
    }
}
