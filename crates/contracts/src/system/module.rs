use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Functional area of the console that access grants refer to
/// (Collections, Disbursements, Reports...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemModule {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemModuleDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl SystemModuleDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Module name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> SystemModule {
        SystemModule {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
        }
    }
}

impl From<&SystemModule> for SystemModuleDraft {
    fn from(record: &SystemModule) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            status: record.status,
        }
    }
}

impl Resource for SystemModule {
    type Draft = SystemModuleDraft;
    const BASE_PATH: &'static str = "/module";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Module"
    }

    fn list_name() -> &'static str {
        "Modules"
    }
}
