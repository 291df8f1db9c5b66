use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::resource::Resource;
use crate::shared::status::RecordStatus;
use crate::shared::validate::{FieldErrors, Validator};

/// Document classes that carry their own numbering series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentTypeCategory {
    TravelOrder,
    DisbursementVoucher,
    ObligationRequest,
    OfficialReceipt,
    PurchaseOrder,
    /// Categories added server-side that this build does not know yet.
    #[serde(other)]
    Unknown,
}

impl DocumentTypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentTypeCategory::TravelOrder => "TravelOrder",
            DocumentTypeCategory::DisbursementVoucher => "DisbursementVoucher",
            DocumentTypeCategory::ObligationRequest => "ObligationRequest",
            DocumentTypeCategory::OfficialReceipt => "OfficialReceipt",
            DocumentTypeCategory::PurchaseOrder => "PurchaseOrder",
            DocumentTypeCategory::Unknown => "Unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentTypeCategory::TravelOrder => "Travel Order",
            DocumentTypeCategory::DisbursementVoucher => "Disbursement Voucher",
            DocumentTypeCategory::ObligationRequest => "Obligation Request",
            DocumentTypeCategory::OfficialReceipt => "Official Receipt",
            DocumentTypeCategory::PurchaseOrder => "Purchase Order",
            DocumentTypeCategory::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> DocumentTypeCategory {
        match value {
            "TravelOrder" => DocumentTypeCategory::TravelOrder,
            "DisbursementVoucher" => DocumentTypeCategory::DisbursementVoucher,
            "ObligationRequest" => DocumentTypeCategory::ObligationRequest,
            "OfficialReceipt" => DocumentTypeCategory::OfficialReceipt,
            "PurchaseOrder" => DocumentTypeCategory::PurchaseOrder,
            _ => DocumentTypeCategory::Unknown,
        }
    }

    pub fn all() -> [DocumentTypeCategory; 5] {
        [
            DocumentTypeCategory::TravelOrder,
            DocumentTypeCategory::DisbursementVoucher,
            DocumentTypeCategory::ObligationRequest,
            DocumentTypeCategory::OfficialReceipt,
            DocumentTypeCategory::PurchaseOrder,
        ]
    }
}

impl Default for DocumentTypeCategory {
    fn default() -> Self {
        DocumentTypeCategory::Unknown
    }
}

/// Numbering series setup for one document class. `current_number` is the
/// number the next issued document will take; issuance advances it on the
/// server, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentDetail {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub start_number: i64,
    pub current_number: i64,
    pub document_type_category: DocumentTypeCategory,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentDetailDraft {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub start_number: i64,
    pub current_number: i64,
    pub document_type_category: DocumentTypeCategory,
    #[serde(default)]
    pub status: RecordStatus,
}

impl Default for DocumentDetailDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            start_number: 1,
            current_number: 1,
            document_type_category: DocumentTypeCategory::Unknown,
            status: RecordStatus::Active,
        }
    }
}

impl DocumentDetailDraft {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.require("Name", &self.name, "Series name");
        v.check(
            "DocumentTypeCategory",
            self.document_type_category != DocumentTypeCategory::Unknown,
            "Document type is required",
        );
        v.min("StartNumber", self.start_number, 1, "Start number");
        v.check(
            "CurrentNumber",
            self.current_number >= self.start_number,
            "Current number cannot be below the start number",
        );
        v.finish()
    }

    pub fn into_record(self, id: i32) -> DocumentDetail {
        DocumentDetail {
            id,
            name: self.name,
            code: self.code,
            prefix: self.prefix,
            suffix: self.suffix,
            start_number: self.start_number,
            current_number: self.current_number,
            document_type_category: self.document_type_category,
            status: self.status,
        }
    }
}

impl From<&DocumentDetail> for DocumentDetailDraft {
    fn from(record: &DocumentDetail) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            prefix: record.prefix.clone(),
            suffix: record.suffix.clone(),
            start_number: record.start_number,
            current_number: record.current_number,
            document_type_category: record.document_type_category,
            status: record.status,
        }
    }
}

impl Resource for DocumentDetail {
    type Draft = DocumentDetailDraft;
    const BASE_PATH: &'static str = "/documentDetail";

    fn id(&self) -> i32 {
        self.id
    }

    fn element_name() -> &'static str {
        "Document Detail"
    }

    fn list_name() -> &'static str {
        "Document Details"
    }
}

/// The number a document of this category would take right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumber {
    pub prefix: String,
    pub number: i64,
    pub suffix: String,
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.number, self.suffix)
    }
}

/// Reads the next document number for a category from the loaded series
/// list. Purely a read: the stored `current_number` is not advanced, and
/// two callers asking before any issuance see the same number. Inactive
/// series are skipped; the first active match wins.
pub fn next_number(
    details: &[DocumentDetail],
    category: DocumentTypeCategory,
) -> Option<DocumentNumber> {
    details
        .iter()
        .find(|d| d.document_type_category == category && d.status.is_active())
        .map(|d| DocumentNumber {
            prefix: d.prefix.clone(),
            number: d.current_number,
            suffix: d.suffix.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(
        id: i32,
        category: DocumentTypeCategory,
        current: i64,
        status: RecordStatus,
    ) -> DocumentDetail {
        DocumentDetail {
            id,
            name: format!("Series {}", id),
            code: String::new(),
            prefix: "TO-2026-".to_string(),
            suffix: String::new(),
            start_number: 1,
            current_number: current,
            document_type_category: category,
            status,
        }
    }

    #[test]
    fn next_number_reads_without_advancing() {
        let details = vec![series(1, DocumentTypeCategory::TravelOrder, 57, RecordStatus::Active)];
        let first = next_number(&details, DocumentTypeCategory::TravelOrder).unwrap();
        let second = next_number(&details, DocumentTypeCategory::TravelOrder).unwrap();
        assert_eq!(first.number, 57);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "TO-2026-57");
    }

    #[test]
    fn next_number_skips_inactive_series() {
        let details = vec![
            series(1, DocumentTypeCategory::TravelOrder, 57, RecordStatus::Inactive),
            series(2, DocumentTypeCategory::TravelOrder, 9, RecordStatus::Active),
        ];
        let n = next_number(&details, DocumentTypeCategory::TravelOrder).unwrap();
        assert_eq!(n.number, 9);
    }

    #[test]
    fn next_number_is_none_for_unconfigured_category() {
        let details = vec![series(1, DocumentTypeCategory::TravelOrder, 57, RecordStatus::Active)];
        assert!(next_number(&details, DocumentTypeCategory::OfficialReceipt).is_none());
    }

    #[test]
    fn current_number_cannot_fall_behind_start() {
        let draft = DocumentDetailDraft {
            name: "Travel Orders".to_string(),
            document_type_category: DocumentTypeCategory::TravelOrder,
            start_number: 100,
            current_number: 40,
            ..Default::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("CurrentNumber"),
            Some("Current number cannot be below the start number")
        );
    }

    #[test]
    fn unknown_categories_survive_decoding() {
        let record: DocumentDetail = serde_json::from_str(
            r#"{"ID":4,"Name":"Burial Permits","StartNumber":1,"CurrentNumber":12,
                "DocumentTypeCategory":"BurialPermit"}"#,
        )
        .unwrap();
        assert_eq!(
            record.document_type_category,
            DocumentTypeCategory::Unknown
        );
    }
}
