pub mod aggregate;

pub use aggregate::{IndustryType, IndustryTypeDraft};
