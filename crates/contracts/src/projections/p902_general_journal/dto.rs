use serde::{Deserialize, Serialize};

pub const VIEW_PATH: &str = "/generalJournal/view";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralJournalRequest {
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    pub date_from: String,
    pub date_to: String,
}

/// One journal entry line, grouped by JEV number in display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralJournalRow {
    pub date: String,
    pub jev_no: String,
    pub account_code: String,
    #[serde(default)]
    pub account_title: String,
    #[serde(default)]
    pub particulars: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneralJournalTotals {
    pub debit: f64,
    pub credit: f64,
}

pub fn totals(rows: &[GeneralJournalRow]) -> GeneralJournalTotals {
    rows.iter()
        .fold(GeneralJournalTotals::default(), |mut acc, row| {
            acc.debit += row.debit;
            acc.credit += row.credit;
            acc
        })
}
