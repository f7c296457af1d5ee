//! Project handlers: list and create.
//!
//! Creation requires only a valid token — any role may create a project.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use snag_core::entities::Project;
use snag_core::enums::ProjectStatus;
use snag_core::ids;

use crate::error::ApiError;
use crate::extract::authenticate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    authenticate(&state, &headers).await?;
    let projects = state.store.list_projects().await?;
    Ok(Json(json!({ "projects": projects })))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateProject>,
) -> Result<Json<Value>, ApiError> {
    let caller = authenticate(&state, &headers).await?;

    let project = Project {
        id: ids::generate(ids::PREFIX_PROJECT),
        name: body.name,
        description: body.description,
        start_date: body.start_date,
        end_date: body.end_date,
        created_by: caller.user_id,
        created_at: Utc::now(),
        status: ProjectStatus::Active,
    };
    state.store.put_project(&project).await?;

    tracing::info!(project_id = %project.id, "project created");
    Ok(Json(json!({ "project": project })))
}
