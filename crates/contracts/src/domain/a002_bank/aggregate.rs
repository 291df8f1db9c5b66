use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Depository account of the LGU. Each account is attached to the fund
/// whose collections it receives; cashbook views are filtered by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bank {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub branch: String,
    pub account_no: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankDraft {
    pub name: String,
    #[serde(default)]
    pub branch: String,
    pub account_no: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl BankDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Bank name");
        v.require("AccountNo", &self.account_no, "Account number");
        v.require_selected("FundID", self.fund_id, "Fund");
        v.finish()
    }

    pub fn into_record(self, id: i32) -> Bank {
        Bank {
            id,
            name: self.name,
            branch: self.branch,
            account_no: self.account_no,
            account_name: self.account_name,
            fund_id: self.fund_id,
            address: self.address,
            status: self.status,
        }
    }
}

impl From<&Bank> for BankDraft {
    fn from(record: &Bank) -> Self {
        Self {
            name: record.name.clone(),
            branch: record.branch.clone(),
            account_no: record.account_no.clone(),
            account_name: record.account_name.clone(),
            fund_id: record.fund_id,
            address: record.address.clone(),
            status: record.status,
        }
    }
}

impl Resource for Bank {
    type Draft = BankDraft;
    const BASE_PATH: &'static str = "/bank";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Bank"
    }

    fn list_name() -> &'static str {
        "Banks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_reference_uses_upper_id_suffix() {
        let draft = BankDraft {
            name: "Land Bank".to_string(),
            account_no: "0452-1011-23".to_string(),
            fund_id: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["FundID"], 1);
        assert_eq!(json["AccountNo"], "0452-1011-23");
        assert!(json.get("FundId").is_none());
    }

    #[test]
    fn validate_requires_name_account_and_fund() {
        let errors = BankDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("FundID"), Some("Fund is required"));
    }
}
