//! REST access to the finance backend.
//!
//! One generic client covers every resource collection; report views and
//! the multipart travel-order upload get their own entry points. All
//! calls attach the bearer token when the session has one.

pub mod client;
pub mod error;

pub use client::{
    api_base, api_url, create, create_with_attachments, fetch_list, fetch_report, remove, replace,
    replace_with_attachments,
};
pub use error::ApiError;
