pub mod address;
pub mod resource;
pub mod status;
pub mod validate;

pub use address::AddressSelection;
pub use resource::Resource;
pub use status::RecordStatus;
pub use validate::{FieldErrors, Validator};
