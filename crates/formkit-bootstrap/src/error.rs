//! Error types for rendering.

use thiserror::Error;

/// Rendering errors.
///
/// All of them are caller bugs; degraded inputs (no translator, missing
/// options) never produce an error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A priority group does not exist in the form.
    #[error("form has no group {0}")]
    UnknownGroup(String),

    /// A partial was requested for a control the form does not have.
    #[error("form has no control {0}")]
    UnknownControl(String),

    /// The template engine failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Template data or configuration could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
