use serde::{Deserialize, Serialize};

pub const VIEW_PATH: &str = "/cashbook/view";

/// Filter posted to the cashbook view. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CashbookRequest {
    #[serde(rename = "BankID")]
    pub bank_id: Option<i32>,
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    pub date_from: String,
    pub date_to: String,
}

/// One cashbook line. `balance` is the running balance as computed by the
/// server; the client never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CashbookRow {
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
pub struct CashbookTotals {
    pub debit: f64,
    pub credit: f64,
}

pub fn totals(rows: &[CashbookRow]) -> CashbookTotals {
    rows.iter().fold(CashbookTotals::default(), |mut acc, row| {
        acc.debit += row.debit;
        acc.credit += row.credit;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_debit_and_credit_columns() {
        let rows = vec![
            CashbookRow {
                date: "2026-02-01".to_string(),
                reference: "OR-1001".to_string(),
                particulars: "RPT collection".to_string(),
                debit: 15_000.0,
                credit: 0.0,
                balance: 15_000.0,
            },
            CashbookRow {
                date: "2026-02-03".to_string(),
                reference: "CK-2201".to_string(),
                particulars: "Office supplies".to_string(),
                debit: 0.0,
                credit: 4_250.50,
                balance: 10_749.50,
            },
        ];
        let t = totals(&rows);
        assert_eq!(t.debit, 15_000.0);
        assert_eq!(t.credit, 4_250.50);
    }
}
