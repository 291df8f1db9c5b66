pub mod dto;

pub use dto::{
    totals, SubsidiaryLedgerRequest, SubsidiaryLedgerRow, SubsidiaryLedgerTotals, VIEW_PATH,
};
