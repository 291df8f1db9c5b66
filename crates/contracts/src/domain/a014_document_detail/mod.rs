pub mod aggregate;

pub use aggregate::{
    next_number, DocumentDetail, DocumentDetailDraft, DocumentNumber, DocumentTypeCategory,
};
