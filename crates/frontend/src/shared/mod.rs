pub mod api;
pub mod components;
pub mod date_utils;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod reference_page;
pub mod session;
pub mod store;
pub mod theme;
