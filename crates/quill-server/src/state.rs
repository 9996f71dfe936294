//! Application state.
//!
//! Shared state for all request handlers. The cache lives here: it is
//! constructed once at service start and only the HTTP layer touches it;
//! the content pipeline stays stateless.

use std::sync::Arc;

use quill_cache::TtlCache;
use quill_mailer::Mailer;
use quill_notion::ContentSource;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Upstream content store.
    pub(crate) source: Arc<dyn ContentSource>,
    /// Response cache (serialized JSON payloads).
    pub(crate) cache: TtlCache<serde_json::Value>,
    /// Whether responses are cached at all.
    pub(crate) cache_enabled: bool,
    /// TTL in seconds for the posts listing.
    pub(crate) posts_ttl: u64,
    /// TTL in seconds for individual posts.
    pub(crate) post_ttl: u64,
    /// Contact-form relay (`None` disables the contact endpoint).
    pub(crate) mailer: Option<Mailer>,
    /// Origins allowed by CORS.
    pub(crate) allowed_origins: Vec<String>,
    /// Application version reported by the banner endpoint.
    pub(crate) version: String,
}
