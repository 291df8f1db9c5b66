use serde::{Deserialize, Serialize};

use crate::shared::address::AddressSelection;
use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Payee of disbursements. Classified by vendor type and industry for
/// procurement reporting; the RDO code identifies the BIR district the
/// vendor files under, needed on withholding-tax certificates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vendor {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "TIN", default)]
    pub tin: String,
    #[serde(rename = "RDO", default)]
    pub rdo: String,
    #[serde(rename = "VendorTypeID")]
    pub vendor_type_id: Option<i32>,
    #[serde(rename = "IndustryTypeID")]
    pub industry_type_id: Option<i32>,
    #[serde(rename = "PaymentTermsID")]
    pub payment_terms_id: Option<i32>,
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
pub struct VendorDraft {
    pub name: String,
    #[serde(rename = "TIN", default)]
    pub tin: String,
    #[serde(rename = "RDO", default)]
    pub rdo: String,
    #[serde(rename = "VendorTypeID")]
    pub vendor_type_id: Option<i32>,
    #[serde(rename = "IndustryTypeID")]
    pub industry_type_id: Option<i32>,
    #[serde(rename = "PaymentTermsID")]
    pub payment_terms_id: Option<i32>,
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

impl VendorDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Vendor name");
        v.digits("TIN", &self.tin, &[9, 12], "TIN");
        v.digits("RDO", &self.rdo, &[3], "RDO code");
        v.require_selected("VendorTypeID", self.vendor_type_id, "Vendor type");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Vendor {
        Vendor {
            id,
            name: self.name,
            tin: self.tin,
            rdo: self.rdo,
            vendor_type_id: self.vendor_type_id,
            industry_type_id: self.industry_type_id,
            payment_terms_id: self.payment_terms_id,
            address: self.address,
            street: self.street,
            contact_person: self.contact_person,
            contact_no: self.contact_no,
            email: self.email,
            status: self.status,
        }
    }
}

impl From<&Vendor> for VendorDraft {
    fn from(record: &Vendor) -> Self {
        Self {
            name: record.name.clone(),
            tin: record.tin.clone(),
            rdo: record.rdo.clone(),
            vendor_type_id: record.vendor_type_id,
            industry_type_id: record.industry_type_id,
            payment_terms_id: record.payment_terms_id,
            address: record.address,
            street: record.street.clone(),
            contact_person: record.contact_person.clone(),
            contact_no: record.contact_no.clone(),
            email: record.email.clone(),
            status: record.status,
        }
    }
}

impl Resource for Vendor {
    type Draft = VendorDraft;
    const BASE_PATH: &'static str = "/vendor";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_checks_rdo_alongside_tin() {
        let draft = VendorDraft {
            name: "ACME Trading".to_string(),
            tin: "123456789".to_string(),
            rdo: "21".to_string(),
            vendor_type_id: Some(2),
            ..Default::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("RDO"), Some("RDO code must be 3 digits"));
    }

    #[test]
    fn classification_keys_use_upper_id_suffix() {
        let draft = VendorDraft {
            name: "ACME Trading".to_string(),
            vendor_type_id: Some(2),
            industry_type_id: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["VendorTypeID"], 2);
        assert_eq!(json["IndustryTypeID"], 7);
        assert_eq!(json["PaymentTermsID"], serde_json::Value::Null);
    }
}
