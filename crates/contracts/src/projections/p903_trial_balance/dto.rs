use serde::{Deserialize, Serialize};

pub const VIEW_PATH: &str = "/trialBalanceReport/view";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrialBalanceRequest {
    #[serde(rename = "FundID")]
    pub fund_id: Option<i32>,
    pub date_from: String,
    pub date_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub account_title: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialBalanceTotals {
    pub debit: f64,
    pub credit: f64,
}

impl TrialBalanceTotals {
    /// Column totals must agree to the centavo for the books to close.
    pub fn is_balanced(&self) -> bool {
        (self.debit - self.credit).abs() < 0.005
    }
}

pub fn totals(rows: &[TrialBalanceRow]) -> TrialBalanceTotals {
    rows.iter()
        .fold(TrialBalanceTotals::default(), |mut acc, row| {
            acc.debit += row.debit;
            acc.credit += row.credit;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, debit: f64, credit: f64) -> TrialBalanceRow {
        TrialBalanceRow {
            account_code: code.to_string(),
            account_title: format!("Account {}", code),
            debit,
            credit,
        }
    }

    #[test]
    fn balanced_books_report_balanced() {
        let rows = vec![row("1-01-01-010", 250_000.0, 0.0), row("4-01-02-040", 0.0, 250_000.0)];
        let t = totals(&rows);
        assert!(t.is_balanced());
    }

    #[test]
    fn a_centavo_off_is_out_of_balance() {
        let rows = vec![row("1-01-01-010", 100.00, 0.0), row("4-01-02-040", 0.0, 100.01)];
        assert!(!totals(&rows).is_balanced());
    }
}
