//! Shared application state for the axum router.

use std::sync::Arc;

use snag_auth::Authenticator;
use snag_store::SnagStore;

/// Handles shared by every request: the record store and the identity
/// provider seam. Both are cheap to clone via `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SnagStore>,
    pub auth: Arc<dyn Authenticator>,
}
