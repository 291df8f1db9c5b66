use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::validate::{FieldErrors, Validator};

/// Smallest addressable unit. Carries the full ancestor chain so selecting
/// a barangay resolves the whole address in one step. Nothing checks that
/// `province_code` and `region_code` agree with the municipality's own
/// parents; the record is trusted as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Barangay {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub municipality_code: i32,
    pub province_code: i32,
    pub region_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BarangayDraft {
    pub name: String,
    pub municipality_code: Option<i32>,
    pub province_code: Option<i32>,
    pub region_code: Option<i32>,
}

impl BarangayDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Barangay name");
        v.require_selected("MunicipalityCode", self.municipality_code, "Municipality");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Barangay {
        Barangay {
            id,
            name: self.name,
            municipality_code: self.municipality_code.unwrap_or_default(),
            province_code: self.province_code.unwrap_or_default(),
            region_code: self.region_code.unwrap_or_default(),
        }
    }
}

impl From<&Barangay> for BarangayDraft {
    fn from(record: &Barangay) -> Self {
        Self {
            name: record.name.clone(),
            municipality_code: Some(record.municipality_code),
            province_code: Some(record.province_code),
            region_code: Some(record.region_code),
        }
    }
}

impl Resource for Barangay {
    type Draft = BarangayDraft;
    const BASE_PATH: &'static str = "/barangay";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Barangay"
    }

    fn list_name() -> &'static str {
        "Barangays"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_match_the_backend() {
        let record = Barangay {
            id: 7,
            name: "San Isidro".to_string(),
            municipality_code: 3,
            province_code: 5,
            region_code: 2,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ID": 7,
                "Name": "San Isidro",
                "MunicipalityCode": 3,
                "ProvinceCode": 5,
                "RegionCode": 2
            })
        );
    }

    #[test]
    fn decodes_backend_payload() {
        let record: Barangay = serde_json::from_str(
            r#"{"ID":12,"Name":"Poblacion","MunicipalityCode":4,"ProvinceCode":9,"RegionCode":1}"#,
        )
        .unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.municipality_code, 4);
    }
}
