use chrono::{DateTime, Utc};

use snag_core::identity::AuthIdentity;

/// Parsed and validated Clerk JWT claims.
///
/// Wraps the relevant fields from a validated token into a Snag-specific
/// struct. Produced by JWKS validation, consumed by the request handlers via
/// [`AuthIdentity`].
#[derive(Debug, Clone)]
pub struct BearerClaims {
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl BearerClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    ///
    /// The token carries no email claim; handlers that need one read the
    /// caller's User record instead.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_identity_maps_user_id_without_email() {
        let claims = BearerClaims {
            user_id: "user_test123".into(),
            expires_at: Utc::now() + chrono::TimeDelta::hours(1),
        };
        let identity = claims.to_identity();
        assert_eq!(identity.user_id, "user_test123");
        assert!(identity.email.is_none());
    }
}
