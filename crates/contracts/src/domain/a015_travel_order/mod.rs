pub mod aggregate;

pub use aggregate::{TravelOrder, TravelOrderAttachment, TravelOrderDraft};
