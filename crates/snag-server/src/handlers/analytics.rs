//! Analytics handler: one-pass summary over all defects.
//!
//! "Past" for the overdue count is wall-clock time at request time; the
//! collection is scanned in one shot so there is no skew within a response.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use chrono::Utc;

use snag_core::analytics::{DefectSummary, summarize};

use crate::error::ApiError;
use crate::extract::authenticate;
use crate::state::AppState;

pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DefectSummary>, ApiError> {
    authenticate(&state, &headers).await?;
    let defects = state.store.list_defects().await?;
    Ok(Json(summarize(&defects, Utc::now())))
}
