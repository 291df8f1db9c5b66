pub mod aggregate;

pub use aggregate::{Province, ProvinceDraft};
