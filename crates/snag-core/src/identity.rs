//! Authenticated-identity type for cross-crate passing.

use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity.
///
/// Produced by `snag-auth` from a validated bearer token, consumed by the
/// request handlers. Contains only data fields — no auth logic. The role is
/// deliberately absent: authorization reads the caller's own User record,
/// not token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// Identity provider's user id (JWT `sub` claim).
    pub user_id: String,
    /// Email, when the provider surfaced one. Token validation alone does
    /// not yield it; identity creation does.
    pub email: Option<String>,
}
