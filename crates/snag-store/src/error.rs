//! Store error types for snag-store.

use thiserror::Error;

/// Errors from record-store operations.
///
/// The store does not retry; callers surface these as a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A stored document could not be encoded or decoded.
    #[error("Invalid document: {0}")]
    Document(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
