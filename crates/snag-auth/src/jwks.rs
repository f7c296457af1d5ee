use std::sync::Arc;

use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::BearerClaims;
use crate::error::AuthError;

/// Validate a Clerk JWT via JWKS and extract Snag-specific claims.
///
/// The provider caches public keys internally (1 hour), so repeated
/// validations do not refetch JWKS. The caller owns the provider; a
/// long-running server creates it once per authenticator.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token is invalid, expired,
/// or the JWKS endpoint is unreachable.
pub async fn validate(
    jwt: &str,
    provider: Arc<MemoryCacheJwksProvider>,
) -> Result<BearerClaims, AuthError> {
    let clerk_jwt = validate_jwt(jwt, provider)
        .await
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    let expires_at = chrono::DateTime::from_timestamp(i64::from(clerk_jwt.exp), 0)
        .ok_or_else(|| AuthError::InvalidToken("invalid exp timestamp".into()))?;

    Ok(BearerClaims {
        user_id: clerk_jwt.sub,
        expires_at,
    })
}
