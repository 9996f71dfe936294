//! HTTP server for the Quill blog API.
//!
//! This crate provides the axum HTTP layer over the content pipeline:
//! - `GET /posts` and `GET /posts/{slug}` serve the blog (cached)
//! - `GET /cache/stats` and `POST /cache/clear` manage the response cache
//! - `POST /webhooks/notion` invalidates the cache on workspace events
//! - `POST /contact` relays contact-form submissions by mail
//!
//! # Architecture
//!
//! ```text
//! Frontend ──HTTP──► axum router (quill-server)
//!                        │
//!                        ├─► posts handlers ──► TtlCache (response JSON)
//!                        │        │
//!                        │        └─► spawn_blocking ──► ContentSource
//!                        │                                  │
//!                        │                          quill-content pipeline
//!                        │
//!                        ├─► webhook handler ──► TtlCache::clear
//!                        │
//!                        └─► contact handler ──► Mailer (SMTP)
//! ```
//!
//! The cache is constructed here, once, and never leaves the HTTP layer;
//! pipeline functions stay pure.

mod app;
mod error;
mod handlers;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use quill_cache::TtlCache;
use quill_mailer::Mailer;
use quill_notion::ContentSource;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether responses are cached.
    pub cache_enabled: bool,
    /// Default cache TTL in seconds.
    pub default_ttl: u64,
    /// TTL in seconds for the posts listing.
    pub posts_ttl: u64,
    /// TTL in seconds for individual posts.
    pub post_ttl: u64,
    /// Origins allowed by CORS.
    pub allowed_origins: Vec<String>,
    /// Application version (reported by the banner endpoint).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7900,
            cache_enabled: true,
            default_ttl: 300,
            posts_ttl: 300,
            post_ttl: 600,
            allowed_origins: vec!["http://localhost:3000".to_owned()],
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `source` - Upstream content store
/// * `mailer` - Contact-form relay (`None` leaves `/contact` returning 503)
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    source: Arc<dyn ContentSource>,
    mailer: Option<Mailer>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create app state; the cache lives and dies with the server.
    let state = Arc::new(AppState {
        source,
        cache: TtlCache::new(config.default_ttl),
        cache_enabled: config.cache_enabled,
        posts_ttl: config.posts_ttl,
        post_ttl: config.post_ttl,
        mailer,
        allowed_origins: config.allowed_origins.clone(),
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Quill config.
///
/// # Arguments
///
/// * `config` - Quill configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &quill_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cache_enabled: config.cache.enabled,
        default_ttl: config.cache.default_ttl,
        posts_ttl: config.cache.posts_ttl,
        post_ttl: config.cache.post_ttl,
        allowed_origins: config.cors.allowed_origins.clone(),
        version,
    }
}
