//! Declarative form fields for the flat reference entities.
//!
//! A page declares its fields once as `FieldSpec`s; `FormField` renders
//! each kind and binds it to the string-keyed `FormValues` working copy.
//! Complex forms (vendors, travel orders) bind their typed drafts by
//! hand instead.

use contracts::shared::RecordStatus;

pub mod field;
pub mod values;

pub use field::{ErrorBanner, FormField};
pub use values::FormValues;

/// Select options for the Active/Inactive flag.
pub fn status_options() -> Vec<SelectOption> {
    RecordStatus::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.as_str()))
        .collect()
}

/// What a form field renders as. One variant per input family the
/// console uses; selects carry their options inline.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Textarea,
    Date,
    Checkbox,
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One field of a declarative form. `key` is the wire field name and
/// doubles as the validation-error key.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
        }
    }

    pub fn textarea(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Textarea,
            required: false,
        }
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Date,
            required: false,
        }
    }

    pub fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Checkbox,
            required: false,
        }
    }

    pub fn select(key: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Select(options),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
