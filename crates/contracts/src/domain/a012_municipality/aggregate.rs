use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Municipality or city. Parent codes carry the province's and region's
/// `ID` values; the region code is denormalized onto the record so address
/// back-fill needs no second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Municipality {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub province_code: i32,
    pub region_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MunicipalityDraft {
    pub name: String,
    pub province_code: Option<i32>,
    pub region_code: Option<i32>,
}

impl MunicipalityDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Municipality name");
        v.require_selected("ProvinceCode", self.province_code, "Province");
        v.require_selected("RegionCode", self.region_code, "Region");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Municipality {
        Municipality {
            id,
            name: self.name,
            province_code: self.province_code.unwrap_or_default(),
            region_code: self.region_code.unwrap_or_default(),
        }
    }
}

impl From<&Municipality> for MunicipalityDraft {
    fn from(record: &Municipality) -> Self {
        Self {
            name: record.name.clone(),
            province_code: Some(record.province_code),
            region_code: Some(record.region_code),
        }
    }
}

impl Resource for Municipality {
    type Draft = MunicipalityDraft;
    const BASE_PATH: &'static str = "/municipality";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Municipality"
    }

    fn list_name() -> &'static str {
        "Municipalities"
    }
}
