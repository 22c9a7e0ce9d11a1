//! Error types for form binding and submission.

use fieldscope::schema::error::SchemaError;
use thiserror::Error;

/// Errors raised by [`Form`](crate::Form) operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// The current values do not satisfy the schema.
    #[error("form validation failed:\n{0}")]
    Validation(#[from] SchemaError),

    /// Values could not be converted to or from the typed representation.
    #[error("failed to convert form values: {0}")]
    Conversion(#[from] serde_json::Error),

    #[error("path '{path}' does not address a field of this form")]
    UnknownPath { path: String },

    /// A list index more than one past the current end.
    #[error("path '{path}' skips past the end of a list")]
    IndexOutOfRange { path: String },
}

impl FormError {
    /// Per-field messages for a validation failure, keyed by dotted path.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        match self {
            Self::Validation(err) => err.field_messages(),
            _ => vec![],
        }
    }
}
