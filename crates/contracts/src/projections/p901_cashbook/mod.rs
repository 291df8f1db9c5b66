pub mod dto;

pub use dto::{totals, CashbookRequest, CashbookRow, CashbookTotals, VIEW_PATH};
