//! HTTP request handlers.

pub(crate) mod cache;
pub(crate) mod contact;
pub(crate) mod posts;
pub(crate) mod webhooks;

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::json;

use crate::state::AppState;

/// Handle GET / (service banner).
pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Quill blog API",
        "status": "running",
        "version": state.version,
    }))
}
