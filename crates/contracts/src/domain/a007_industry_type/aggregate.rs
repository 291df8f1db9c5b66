use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndustryType {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IndustryTypeDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl IndustryTypeDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Industry type name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> IndustryType {
        IndustryType {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl From<&IndustryType> for IndustryTypeDraft {
    fn from(record: &IndustryType) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl Resource for IndustryType {
    type Draft = IndustryTypeDraft;
    const BASE_PATH: &'static str = "/industryType";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Industry Type"
    }

    fn list_name() -> &'static str {
        "Industry Types"
    }
}
