//! Clerk Backend API admin helpers.
//!
//! Calls the Clerk Backend API directly via `reqwest` (clerk-rs doesn't
//! expose the user-management endpoints we need). Requires
//! `config.clerk.secret_key`. Used by signup (create identity) and by the
//! role-update operation (patch stored role metadata).

use serde::{Deserialize, Serialize};
use serde_json::json;

use snag_core::enums::Role;

use crate::error::AuthError;

const CLERK_API_BASE: &str = "https://api.clerk.com/v1";

/// Identity created through the Backend API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIdentity {
    pub id: String,
    pub email: Option<String>,
}

/// Create a user identity with the given credentials and a `role` entry in
/// its public metadata.
///
/// # Errors
///
/// Returns `AuthError::ClerkApi` if the API call fails or returns non-2xx.
pub async fn create_user(
    secret_key: &str,
    email: &str,
    password: &str,
    name: &str,
    role: Role,
) -> Result<CreatedIdentity, AuthError> {
    let url = format!("{CLERK_API_BASE}/users");
    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {secret_key}"))
        .json(&json!({
            "email_address": [email],
            "password": password,
            "first_name": name,
            "public_metadata": { "role": role.as_str() },
        }))
        .send()
        .await
        .map_err(|e| AuthError::ClerkApi(format!("create user: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::ClerkApi(format!(
            "create user: HTTP {status}: {body}"
        )));
    }

    #[derive(Deserialize)]
    struct UserRecord {
        id: String,
        #[serde(default)]
        email_addresses: Vec<EmailRecord>,
    }
    #[derive(Deserialize)]
    struct EmailRecord {
        email_address: String,
    }

    let record: UserRecord = resp
        .json()
        .await
        .map_err(|e| AuthError::ClerkApi(format!("create user: decode: {e}")))?;

    Ok(CreatedIdentity {
        id: record.id,
        email: record
            .email_addresses
            .into_iter()
            .next()
            .map(|e| e.email_address),
    })
}

/// Patch the stored `role` entry in a user's public metadata.
///
/// Independent of the User record write — the two updates are not atomic.
///
/// # Errors
///
/// Returns `AuthError::ClerkApi` if the API call fails or returns non-2xx.
pub async fn update_role_metadata(
    secret_key: &str,
    user_id: &str,
    role: Role,
) -> Result<(), AuthError> {
    let url = format!("{CLERK_API_BASE}/users/{user_id}/metadata");
    let client = reqwest::Client::new();
    let resp = client
        .patch(&url)
        .header("Authorization", format!("Bearer {secret_key}"))
        .json(&json!({
            "public_metadata": { "role": role.as_str() },
        }))
        .send()
        .await
        .map_err(|e| AuthError::ClerkApi(format!("update role metadata: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::ClerkApi(format!(
            "update role metadata: HTTP {status}: {body}"
        )));
    }

    Ok(())
}
