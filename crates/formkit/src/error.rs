//! Error types for the form model.

use thiserror::Error;

/// Form model errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A control with the same path is already attached.
    #[error("form already has a control named {0}")]
    DuplicateControl(String),

    /// A group with the same name already exists.
    #[error("form already has a group named {0}")]
    DuplicateGroup(String),

    /// A message catalog could not be parsed.
    #[error("failed to parse message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
