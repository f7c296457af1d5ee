//! Bearer extraction, authentication, and the admin gate.
//!
//! Every protected handler starts the same way: pull the bearer token from
//! the `Authorization` header (401 if absent or malformed), resolve it
//! through the authenticator (401 if it cannot produce an identity). Only
//! the role-update handler additionally loads the caller's own User record
//! and requires role `admin` (403 otherwise).

use axum::http::{HeaderMap, header};

use snag_core::entities::User;
use snag_core::enums::Role;
use snag_core::identity::AuthIdentity;

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the bearer token from the `Authorization` header.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` if the header is absent, not valid
/// ASCII, or not a `Bearer` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiError::Unauthorized)?;
    let value = value.to_str().map_err(|_| ApiError::Unauthorized)?;
    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::Unauthorized)
}

/// Resolve the caller's identity from the request headers.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` if no valid bearer token is present or
/// the authenticator rejects it.
pub async fn authenticate(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<AuthIdentity, ApiError> {
    let token = bearer_token(headers)?;
    state.auth.verify(token).await.map_err(|error| {
        tracing::debug!(%error, "bearer token rejected");
        ApiError::Unauthorized
    })
}

/// Load the caller's own User record and require role `admin`.
///
/// A caller without a User record cannot be an admin, so that case is
/// `Forbidden` too, not `NotFound`.
///
/// # Errors
///
/// Returns `ApiError::Forbidden` unless the caller's stored role is `admin`.
pub async fn require_admin(state: &AppState, caller: &AuthIdentity) -> Result<User, ApiError> {
    let user = state
        .store
        .get_user(&caller.user_id)
        .await?
        .ok_or(ApiError::Forbidden)?;
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_unauthorized() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn empty_bearer_is_unauthorized() {
        let headers = headers_with("Bearer ");
        assert!(matches!(
            bearer_token(&headers),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let headers = headers_with("Bearer tok-123");
        assert_eq!(bearer_token(&headers).unwrap(), "tok-123");
    }
}
