use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The bearer token failed JWKS validation (invalid, expired, or the
    /// JWKS endpoint was unreachable).
    #[error("token validation failed: {0}")]
    InvalidToken(String),

    /// A Clerk Backend API call failed.
    #[error("clerk API error: {0}")]
    ClerkApi(String),
}
