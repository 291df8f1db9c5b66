use serde::{Deserialize, Serialize};

// Path spelling is the backend's.
pub const VIEW_PATH: &str = "/subsidiaryLeadger/view";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubsidiaryLedgerRequest {
    pub account_code: String,
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubsidiaryLedgerRow {
    pub date: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub particulars: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubsidiaryLedgerTotals {
    pub debit: f64,
    pub credit: f64,
}

pub fn totals(rows: &[SubsidiaryLedgerRow]) -> SubsidiaryLedgerTotals {
    rows.iter()
        .fold(SubsidiaryLedgerTotals::default(), |mut acc, row| {
            acc.debit += row.debit;
            acc.credit += row.credit;
            acc
        })
}
