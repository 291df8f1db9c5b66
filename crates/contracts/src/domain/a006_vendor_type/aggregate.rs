use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Procurement classification (supplier, contractor, consultant...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorType {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorTypeDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl VendorTypeDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Vendor type name");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> VendorType {
        VendorType {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl From<&VendorType> for VendorTypeDraft {
    fn from(record: &VendorType) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl Resource for VendorType {
    type Draft = VendorTypeDraft;
    const BASE_PATH: &'static str = "/vendorType";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Vendor Type"
    }

    fn list_name() -> &'static str {
        "Vendor Types"
    }
}
