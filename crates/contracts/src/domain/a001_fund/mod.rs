pub mod aggregate;

pub use aggregate::{Fund, FundDraft};
