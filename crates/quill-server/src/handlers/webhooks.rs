//! Webhook endpoint.
//!
//! Notion delivers workspace events here. Any event that can change what
//! the blog serves (page creation, property or content updates, deletion,
//! moves) drops the whole response cache; event payloads don't carry our
//! slugs, so per-key invalidation can't be made reliable. The next
//! request repopulates.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

use crate::state::AppState;

/// Handle POST /webhooks/notion.
pub(crate) async fn notion(
    State(state): State<Arc<AppState>>,
    Json(event): Json<Value>,
) -> Json<Value> {
    // Subscription verification handshake: acknowledge and surface the
    // token in the logs so the operator can confirm it in the Notion UI.
    if let Some(token) = event.get("verification_token").and_then(Value::as_str) {
        info!("Received webhook verification token: {}", token);
        return Json(json!({"received": true, "invalidated": false}));
    }

    let event_type = event.get("type").and_then(Value::as_str).unwrap_or("");
    let invalidated = invalidates_cache(event_type);

    if invalidated {
        info!("Webhook event '{}' cleared the response cache", event_type);
        state.cache.clear();
    } else {
        info!("Webhook event '{}' ignored", event_type);
    }

    Json(json!({"received": true, "invalidated": invalidated}))
}

/// Whether an event type invalidates served content.
fn invalidates_cache(event_type: &str) -> bool {
    let Some(action) = event_type.strip_prefix("page.") else {
        return false;
    };

    matches!(action, "created" | "deleted" | "undeleted" | "moved") || action.ends_with("_updated")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lifecycle_events_invalidate() {
        assert!(invalidates_cache("page.created"));
        assert!(invalidates_cache("page.deleted"));
        assert!(invalidates_cache("page.undeleted"));
        assert!(invalidates_cache("page.moved"));
        assert!(invalidates_cache("page.properties_updated"));
        assert!(invalidates_cache("page.content_updated"));
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert!(!invalidates_cache("page.locked"));
        assert!(!invalidates_cache("database.created"));
        assert!(!invalidates_cache("comment.created"));
        assert!(!invalidates_cache(""));
    }
}
