use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Budgeting fund: General Fund, Special Education Fund, Trust Fund and
/// any locally created special accounts. Every book entry belongs to
/// exactly one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fund {
    #[serde(rename = "ID")]
    pub id: i32,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FundDraft {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl FundDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Code", &self.code, "Fund code");
        v.require("Name", &self.name, "Fund name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Fund {
        Fund {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            status: self.status,
        }
    }
}

impl From<&Fund> for FundDraft {
    fn from(record: &Fund) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            status: record.status,
        }
    }
}

impl Resource for Fund {
    type Draft = FundDraft;
    // Plural stem is historical; every other collection is singular.
    const BASE_PATH: &'static str = "/funds";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Fund"
    }

    fn list_name() -> &'static str {
        "Funds"
    }
}
