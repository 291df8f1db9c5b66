use serde::{Deserialize, Serialize};

use crate::shared::address::AddressSelection;
use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Payor of collections: taxpayers, permittees, lessees of LGU property.
/// The address levels flatten onto the wire object as `RegionID`,
/// `ProvinceID`, `MunicipalityID`, `BarangayID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "TIN", default)]
    pub tin: String,
    #[serde(flatten)]
    pub address: AddressSelection,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerDraft {
    pub name: String,
    #[serde(rename = "TIN", default)]
    pub tin: String,
    #[serde(flatten)]
    pub address: AddressSelection,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl CustomerDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Customer name");
        v.digits("TIN", &self.tin, &[9, 12], "TIN");
        if !self.email.trim().is_empty() {
            v.check("Email", self.email.contains('@'), "Email is not valid");
        }
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Customer {
        Customer {
            id,
            name: self.name,
            tin: self.tin,
            address: self.address,
            street: self.street,
            contact_person: self.contact_person,
            contact_no: self.contact_no,
            email: self.email,
            status: self.status,
        }
    }
}

impl From<&Customer> for CustomerDraft {
    fn from(record: &Customer) -> Self {
        Self {
            name: record.name.clone(),
            tin: record.tin.clone(),
            address: record.address,
            street: record.street.clone(),
            contact_person: record.contact_person.clone(),
            contact_no: record.contact_no.clone(),
            email: record.email.clone(),
            status: record.status,
        }
    }
}

impl Resource for Customer {
    type Draft = CustomerDraft;
    const BASE_PATH: &'static str = "/customer";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_levels_flatten_onto_the_record() {
        let record: Customer = serde_json::from_str(
            r#"{"ID":3,"Name":"Juan Dela Cruz","TIN":"123456789",
                "RegionID":2,"ProvinceID":5,"MunicipalityID":3,"BarangayID":41,
                "Street":"Rizal St."}"#,
        )
        .unwrap();
        assert_eq!(record.address.barangay_id, Some(41));
        assert_eq!(record.address.region_id, Some(2));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["ProvinceID"], 5);
        assert_eq!(json["TIN"], "123456789");
    }

    #[test]
    fn tin_rule_is_nine_or_twelve_digits() {
        let mut draft = CustomerDraft {
            name: "Juan Dela Cruz".to_string(),
            tin: "123456789012".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());

        draft.tin = "12345".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("TIN"), Some("TIN must be 9 or 12 digits"));
    }
}
