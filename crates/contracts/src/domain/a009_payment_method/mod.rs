pub mod aggregate;

pub use aggregate::{PaymentMethod, PaymentMethodDraft};
