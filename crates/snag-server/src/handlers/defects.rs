//! Defect handlers: list, create, get with history, update, add comment.
//!
//! Creation and every update append one history entry each. Comment
//! additions append to the defect's comment sequence and persist the whole
//! document without writing history — a long-standing asymmetry in the
//! audit trail that is reproduced here deliberately rather than fixed.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use snag_core::entities::{Comment, Defect, DefectPatch, HistoryEntry};
use snag_core::enums::{DefectPriority, DefectStatus, HistoryAction};
use snag_core::ids;

use crate::error::ApiError;
use crate::extract::authenticate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDefect {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: DefectPriority,
    #[serde(default)]
    pub assignee: Option<String>,
    /// Lax reference: the project is not required to exist.
    pub project_id: String,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub comment: String,
}

pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    authenticate(&state, &headers).await?;
    let defects = state.store.list_defects().await?;
    Ok(Json(json!({ "defects": defects })))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateDefect>,
) -> Result<Json<Value>, ApiError> {
    let caller = authenticate(&state, &headers).await?;
    let now = Utc::now();

    let defect = Defect {
        id: ids::generate(ids::PREFIX_DEFECT),
        title: body.title,
        description: body.description,
        priority: body.priority,
        assignee: body.assignee,
        project_id: body.project_id,
        due_date: body.due_date,
        status: DefectStatus::New,
        created_by: caller.user_id.clone(),
        created_at: now,
        updated_at: now,
        comments: Vec::new(),
    };
    state.store.put_defect(&defect).await?;

    // Second, independent write; no atomicity with the defect above.
    state
        .store
        .append_history(&HistoryEntry {
            id: ids::generate(ids::PREFIX_HISTORY),
            defect_id: defect.id.clone(),
            action: HistoryAction::Created,
            user_id: caller.user_id,
            timestamp: now,
            details: None,
        })
        .await?;

    tracing::info!(defect_id = %defect.id, "defect created");
    Ok(Json(json!({ "defect": defect })))
}

pub async fn get_one(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    authenticate(&state, &headers).await?;

    let defect = state
        .store
        .get_defect(&id)
        .await?
        .ok_or(ApiError::NotFound("defect"))?;
    let history = state.store.history_for_defect(&id).await?;

    Ok(Json(json!({ "defect": defect, "history": history })))
}

pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<DefectPatch>,
) -> Result<Json<Value>, ApiError> {
    let caller = authenticate(&state, &headers).await?;

    let mut defect = state
        .store
        .get_defect(&id)
        .await?
        .ok_or(ApiError::NotFound("defect"))?;

    let changed = patch.apply(&mut defect);
    let now = Utc::now();
    defect.updated_at = now;
    state.store.put_defect(&defect).await?;

    // One entry per update call, however many fields were supplied. Details
    // name the fields, never their values.
    state
        .store
        .append_history(&HistoryEntry {
            id: ids::generate(ids::PREFIX_HISTORY),
            defect_id: defect.id.clone(),
            action: HistoryAction::Updated,
            user_id: caller.user_id,
            timestamp: now,
            details: Some(changed.join(", ")),
        })
        .await?;

    Ok(Json(json!({ "defect": defect })))
}

pub async fn add_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<CommentBody>,
) -> Result<Json<Value>, ApiError> {
    let caller = authenticate(&state, &headers).await?;

    let mut defect = state
        .store
        .get_defect(&id)
        .await?
        .ok_or(ApiError::NotFound("defect"))?;

    let comment = Comment {
        id: ids::generate(ids::PREFIX_COMMENT),
        author: caller.user_id,
        comment: body.comment,
        timestamp: Utc::now(),
    };
    defect.comments.push(comment.clone());
    // Whole-document write; no history entry and no updatedAt stamp here.
    state.store.put_defect(&defect).await?;

    Ok(Json(json!({ "comment": comment })))
}
