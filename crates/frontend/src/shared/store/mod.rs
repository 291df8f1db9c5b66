//! Generic collection state for API-backed resources.
//!
//! `ResourceCollection` holds the plain state and its transitions;
//! `ResourceStore` wraps it in a signal and drives the client calls. One
//! store per entity type is provided at the app root and shared by every
//! page through context.

pub mod collection;
pub mod resource_store;

pub use collection::ResourceCollection;
pub use resource_store::ResourceStore;
