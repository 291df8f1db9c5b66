use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Top level of the Philippine location hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionDraft {
    pub name: String,
}

impl RegionDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Region name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Region {
        Region {
            id,
            name: self.name,
        }
    }
}

impl From<&Region> for RegionDraft {
    fn from(record: &Region) -> Self {
        Self {
            name: record.name.clone(),
        }
    }
}

impl Resource for Region {
    type Draft = RegionDraft;
    const BASE_PATH: &'static str = "/region";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Region"
    }

    fn list_name() -> &'static str {
        "Regions"
    }
}
