pub mod aggregate;

pub use aggregate::{PaymentTerms, PaymentTermsDraft};
