//! Cross-cutting error types for Eventline.
//!
//! Store failures (`DatabaseError`) and read-path denials (`AuditReadError`)
//! live in their own crates. This module covers errors raised while building
//! or validating domain values.

use thiserror::Error;

/// Errors that can be raised by any Eventline crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A payload could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
