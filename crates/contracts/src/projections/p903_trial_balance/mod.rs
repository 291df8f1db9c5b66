pub mod dto;

pub use dto::{totals, TrialBalanceRequest, TrialBalanceRow, TrialBalanceTotals, VIEW_PATH};
