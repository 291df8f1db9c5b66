pub mod module;
pub mod user_access;

pub use module::{SystemModule, SystemModuleDraft};
pub use user_access::{UserAccess, UserAccessDraft};
