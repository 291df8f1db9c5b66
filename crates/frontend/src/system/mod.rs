pub mod modules;
pub mod user_access;
