use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Settlement terms offered to a vendor; `days` counts from invoice date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentTerms {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub days: i32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentTermsDraft {
    pub name: String,
    #[serde(default)]
    pub days: i32,
    #[serde(default)]
    pub description: String,
}

impl PaymentTermsDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Payment terms name");
        v.min("Days", i64::from(self.days), 0, "Days");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> PaymentTerms {
        PaymentTerms {
            id,
            name: self.name,
            days: self.days,
            description: self.description,
        }
    }
}

impl From<&PaymentTerms> for PaymentTermsDraft {
    fn from(record: &PaymentTerms) -> Self {
        Self {
            name: record.name.clone(),
            days: record.days,
            description: record.description.clone(),
        }
    }
}

impl Resource for PaymentTerms {
    type Draft = PaymentTermsDraft;
    const BASE_PATH: &'static str = "/paymentTerms";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Payment Terms"
    }

    fn list_name() -> &'static str {
        "Payment Terms"
    }
}
