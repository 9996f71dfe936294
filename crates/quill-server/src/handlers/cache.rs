//! Cache management endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

use crate::state::AppState;

/// Handle GET /cache/stats.
///
/// Reports entry counts, sweeps expired entries eagerly, and echoes the
/// configured TTLs.
pub(crate) async fn stats(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.cache.stats();
    let cleaned = state.cache.cleanup_expired();

    Json(json!({
        "cache_stats": stats,
        "expired_cleaned": cleaned,
        "cache_info": {
            "default_ttl": state.cache.default_ttl(),
            "posts_list_ttl": state.posts_ttl,
            "individual_post_ttl": state.post_ttl,
        },
    }))
}

/// Handle POST /cache/clear.
pub(crate) async fn clear(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.cache.clear();
    info!("Response cache cleared by request");

    Json(json!({"cleared": true}))
}
