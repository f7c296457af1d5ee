//! Route table. All routes live under one fixed path prefix, including
//! `/health`; only `/health` and `/signup` skip authentication.

use axum::Router;
use axum::routing::{get, post, put};

use crate::handlers::{analytics, defects, health, projects, users};
use crate::state::AppState;

/// Build the application router under `prefix` (e.g. `"/api"`).
#[must_use]
pub fn router(state: AppState, prefix: &str) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/signup", post(users::signup))
        .route("/projects", get(projects::list).post(projects::create))
        .route("/defects", get(defects::list).post(defects::create))
        .route(
            "/defects/{id}",
            get(defects::get_one).put(defects::update),
        )
        .route("/defects/{id}/comments", post(defects::add_comment))
        .route("/analytics", get(analytics::summary))
        .route("/users", get(users::list))
        .route("/users/{id}/role", put(users::update_role))
        .with_state(state);

    if prefix.is_empty() || prefix == "/" {
        api
    } else {
        Router::new().nest(prefix, api)
    }
}
