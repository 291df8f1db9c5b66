use serde::{Deserialize, Serialize};

use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// File stored against a travel order (itinerary, invitation letter).
/// The server fills everything from the multipart upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelOrderAttachment {
    #[serde(rename = "ID")]
    pub id: i32,
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}

/// Authority-to-travel document for an LGU employee. Created through the
/// multipart endpoint so attachments ride along with the JSON payload;
/// `document_no` defaults from the travel-order numbering series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelOrder {
    #[serde(rename = "ID")]
    pub id: i32,
    pub document_no: String,
    pub date: String,
    pub employee_name: String,
    #[serde(default)]
    pub position: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: String,
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub attachments: Vec<TravelOrderAttachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TravelOrderDraft {
    pub document_no: String,
    pub date: String,
    pub employee_name: String,
    #[serde(default)]
    pub position: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: String,
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl TravelOrderDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("DocumentNo", &self.document_no, "Document number");
        v.require("EmployeeName", &self.employee_name, "Employee name");
        v.require("Destination", &self.destination, "Destination");
        v.require("DateFrom", &self.date_from, "Departure date");
        v.require("DateTo", &self.date_to, "Return date");
        let from = v.date("DateFrom", &self.date_from, "Departure date");
        let to = v.date("DateTo", &self.date_to, "Return date");
        if let (Some(from), Some(to)) = (from, to) {
            v.check(
                "DateTo",
                to >= from,
                "Return date cannot be before the departure date",
            );
        }
        v.finish()
    }

    pub fn into_record(self, id: i32) -> TravelOrder {
        TravelOrder {
            id,
            document_no: self.document_no,
            date: self.date,
            employee_name: self.employee_name,
            position: self.position,
            destination: self.destination,
            purpose: self.purpose,
            date_from: self.date_from,
            date_to: self.date_to,
            status: self.status,
            attachments: Vec::new(),
        }
    }
}

impl From<&TravelOrder> for TravelOrderDraft {
    fn from(record: &TravelOrder) -> Self {
        Self {
            document_no: record.document_no.clone(),
            date: record.date.clone(),
            employee_name: record.employee_name.clone(),
            position: record.position.clone(),
            destination: record.destination.clone(),
            purpose: record.purpose.clone(),
            date_from: record.date_from.clone(),
            date_to: record.date_to.clone(),
            status: record.status,
        }
    }
}

impl Resource for TravelOrder {
    type Draft = TravelOrderDraft;
    const BASE_PATH: &'static str = "/travelOrder";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Travel Order"
    }

    fn list_name() -> &'static str {
        "Travel Orders"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TravelOrderDraft {
        TravelOrderDraft {
            document_no: "TO-2026-57".to_string(),
            date: "2026-02-10".to_string(),
            employee_name: "Maria Santos".to_string(),
            position: "Municipal Accountant".to_string(),
            destination: "Cebu City".to_string(),
            purpose: "COA exit conference".to_string(),
            date_from: "2026-02-17".to_string(),
            date_to: "2026-02-19".to_string(),
            status: RecordStatus::Active,
        }
    }

    #[test]
    fn return_date_cannot_precede_departure() {
        let mut draft = valid_draft();
        assert!(draft.validate().is_ok());

        draft.date_to = "2026-02-16".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("DateTo"),
            Some("Return date cannot be before the departure date")
        );
    }

    #[test]
    fn attachments_default_to_empty_on_decode() {
        let record: TravelOrder = serde_json::from_str(
            r#"{"ID":5,"DocumentNo":"TO-2026-57","Date":"2026-02-10",
                "EmployeeName":"Maria Santos","Destination":"Cebu City",
                "DateFrom":"2026-02-17","DateTo":"2026-02-19"}"#,
        )
        .unwrap();
        assert!(record.attachments.is_empty());
    }
}
