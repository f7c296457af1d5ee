//! Cross-cutting error types for Snag.
//!
//! Domain-specific errors (`StoreError`, `AuthError`, the HTTP `ApiError`)
//! are defined in their respective crates; `CoreError` covers validation
//! failures raised by core types themselves.

use thiserror::Error;

/// Errors raised by core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation against a closed enumeration or format.
    #[error("{0}")]
    Validation(String),
}
