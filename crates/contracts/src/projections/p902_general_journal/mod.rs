pub mod dto;

pub use dto::{totals, GeneralJournalRequest, GeneralJournalRow, GeneralJournalTotals, VIEW_PATH};
