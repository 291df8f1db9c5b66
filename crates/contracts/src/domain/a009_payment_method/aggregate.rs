use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// How a disbursement is settled: check, cash advance, bank transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethod {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentMethodDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl PaymentMethodDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Payment method name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> PaymentMethod {
        PaymentMethod {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl From<&PaymentMethod> for PaymentMethodDraft {
    fn from(record: &PaymentMethod) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl Resource for PaymentMethod {
    type Draft = PaymentMethodDraft;
    const BASE_PATH: &'static str = "/paymentMethod";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Payment Method"
    }

    fn list_name() -> &'static str {
        "Payment Methods"
    }
}
