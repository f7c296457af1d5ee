//! User handlers: signup, listing, and the admin-gated role update.
//!
//! Listing is open to any authenticated caller — there is no admin gate on
//! it, mirroring the rest of the product's authorization model as shipped
//! (a known over-exposure, reproduced deliberately).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use snag_auth::NewIdentity;
use snag_core::entities::User;
use snag_core::enums::Role;

use crate::error::ApiError;
use crate::extract::{authenticate, require_admin};
use crate::state::AppState;

/// Signup payload. A `role` field in the body is accepted and ignored:
/// accounts always start as `observer`, privileged roles are granted only
/// through the role-update operation.
#[derive(Debug, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleBody {
    pub role: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<Json<Value>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() || body.name.is_empty() {
        return Err(ApiError::Validation(
            "email, password and name are required".into(),
        ));
    }

    let identity = state
        .auth
        .create_identity(&NewIdentity {
            email: body.email.clone(),
            password: body.password,
            name: body.name.clone(),
            role: Role::Observer,
        })
        .await
        .map_err(|error| ApiError::Internal(error.into()))?;

    let user = User {
        id: identity.user_id,
        email: body.email,
        name: body.name,
        role: Role::Observer,
        created_at: Utc::now(),
    };
    state.store.put_user(&user).await?;

    tracing::info!(user_id = %user.id, "user signed up");
    Ok(Json(json!({ "user": user })))
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    authenticate(&state, &headers).await?;
    let users = state.store.list_users().await?;
    Ok(Json(json!({ "users": users })))
}

pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<RoleBody>,
) -> Result<Json<Value>, ApiError> {
    let caller = authenticate(&state, &headers).await?;
    // Gate before looking at the payload: non-admins get 403 regardless of
    // whether the requested role is valid.
    require_admin(&state, &caller).await?;

    let role: Role = body
        .role
        .parse()
        .map_err(|_| ApiError::Validation(format!("unknown role: {}", body.role)))?;

    let mut user = state
        .store
        .get_user(&id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    user.role = role;
    state.store.put_user(&user).await?;

    // Second write to the identity provider's metadata; not atomic with the
    // record write above.
    state
        .auth
        .set_role_metadata(&id, role)
        .await
        .map_err(|error| ApiError::Internal(error.into()))?;

    tracing::info!(user_id = %id, role = %role, "role updated");
    Ok(Json(json!({ "user": user })))
}
