use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Province; `region_code` is the parent region's `ID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Province {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub region_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvinceDraft {
    pub name: String,
    pub region_code: Option<i32>,
}

impl ProvinceDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Province name");
        v.require_selected("RegionCode", self.region_code, "Region");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Province {
        Province {
            id,
            name: self.name,
            region_code: self.region_code.unwrap_or_default(),
        }
    }
}

impl From<&Province> for ProvinceDraft {
    fn from(record: &Province) -> Self {
        Self {
            name: record.name.clone(),
            region_code: Some(record.region_code),
        }
    }
}

impl Resource for Province {
    type Draft = ProvinceDraft;
    const BASE_PATH: &'static str = "/province";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Province"
    }

    fn list_name() -> &'static str {
        "Provinces"
    }
}
