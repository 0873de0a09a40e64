// File: src/error.rs
// Purpose: Structural errors raised while building or submitting a form

use std::collections::BTreeMap;
use thiserror::Error;

use rusty_builder_types::FieldType;

/// Errors that are not per-field validation messages.
///
/// Field validation failures live in `FormState::errors`; this type covers
/// malformed definitions and blocked submissions.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("field label must not be empty")]
    EmptyLabel,

    #[error("duplicate field id `{0}`")]
    DuplicateFieldId(String),

    #[error("field `{field}` has a condition on unknown field `{target}`")]
    UnknownConditionField { field: String, target: String },

    #[error("{field_type} field `{field}` needs at least one option")]
    MissingOptions { field: String, field_type: FieldType },

    #[error("invalid validation pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("form has {} invalid field(s)", errors.len())]
    ValidationFailed { errors: BTreeMap<String, String> },

    #[error("invalid form schema: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    /// Per-field messages of a blocked submission
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FormError::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}
