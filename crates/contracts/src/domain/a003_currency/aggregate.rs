use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    #[serde(rename = "ID")]
    pub id: i32,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrencyDraft {
    pub code: String,
    pub name: String,
}

impl CurrencyDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Code", &self.code, "Currency code");
        v.require("Name", &self.name, "Currency name");
        if !self.code.trim().is_empty() {
            v.check(
                "Code",
                self.code.trim().len() == 3,
                "Currency code must be 3 letters",
            );
        }
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Currency {
        Currency {
            id,
            code: self.code,
            name: self.name,
        }
    }
}

impl From<&Currency> for CurrencyDraft {
    fn from(record: &Currency) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
        }
    }
}

impl Resource for Currency {
    type Draft = CurrencyDraft;
    const BASE_PATH: &'static str = "/currency";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Currency"
    }

    fn list_name() -> &'static str {
        "Currencies"
    }
}
