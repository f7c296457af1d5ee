//! # snag-auth
//!
//! Clerk-based authentication for Snag.
//!
//! The identity provider is an external collaborator: this crate validates
//! bearer tokens via JWKS (`clerk-rs`) and drives the provider's admin
//! interface over the Backend API (`reqwest`) for signup and role-metadata
//! updates. The [`Authenticator`] trait is the seam the HTTP layer depends
//! on, so tests substitute a static double instead of a live provider.

pub mod admin;
pub mod claims;
pub mod error;
pub mod jwks;

pub use claims::BearerClaims;
pub use error::AuthError;

use std::sync::Arc;

use async_trait::async_trait;
use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use snag_core::enums::Role;
use snag_core::identity::AuthIdentity;

/// Request to create a new identity at signup.
///
/// The role is part of the request so the authenticator stores it in the
/// identity's metadata; callers fix it to `observer` — signup never grants a
/// privileged role.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// The identity-provider seam.
///
/// One live implementation ([`ClerkAuthenticator`]); tests use a static
/// token map.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate a bearer token and resolve the caller's identity.
    async fn verify(&self, token: &str) -> Result<AuthIdentity, AuthError>;

    /// Create an identity through the provider's admin interface.
    async fn create_identity(&self, identity: &NewIdentity) -> Result<AuthIdentity, AuthError>;

    /// Update the role stored in the provider's metadata for an identity.
    /// Independent of the User record write; the two are not atomic.
    async fn set_role_metadata(&self, user_id: &str, role: Role) -> Result<(), AuthError>;
}

/// Live authenticator backed by Clerk.
pub struct ClerkAuthenticator {
    secret_key: String,
    jwks: Arc<MemoryCacheJwksProvider>,
}

impl ClerkAuthenticator {
    /// Create an authenticator for the given Clerk secret key.
    ///
    /// The JWKS provider is created once here and caches public keys for the
    /// life of the server.
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        let secret_key = secret_key.into();
        let config = ClerkConfiguration::new(None, None, Some(secret_key.clone()), None);
        let clerk = Clerk::new(config);
        Self {
            secret_key,
            jwks: Arc::new(MemoryCacheJwksProvider::new(clerk)),
        }
    }
}

#[async_trait]
impl Authenticator for ClerkAuthenticator {
    async fn verify(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        let claims = jwks::validate(token, Arc::clone(&self.jwks)).await?;
        Ok(claims.to_identity())
    }

    async fn create_identity(&self, identity: &NewIdentity) -> Result<AuthIdentity, AuthError> {
        let created = admin::create_user(
            &self.secret_key,
            &identity.email,
            &identity.password,
            &identity.name,
            identity.role,
        )
        .await?;
        Ok(AuthIdentity {
            user_id: created.id,
            email: created.email,
        })
    }

    async fn set_role_metadata(&self, user_id: &str, role: Role) -> Result<(), AuthError> {
        admin::update_role_metadata(&self.secret_key, user_id, role).await
    }
}
