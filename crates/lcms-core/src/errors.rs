//! Cross-cutting error types.
//!
//! Store-specific errors (`DatabaseError`) and the reconciliation taxonomy
//! (`ReconcileError`) live in their own crates. The binary converges them
//! through `anyhow`.

use thiserror::Error;

/// Errors raised while building core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, vocabulary, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
