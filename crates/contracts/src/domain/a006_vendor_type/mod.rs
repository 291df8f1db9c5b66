pub mod aggregate;

pub use aggregate::{VendorType, VendorTypeDraft};
