pub mod aggregate;

pub use aggregate::{Barangay, BarangayDraft};
