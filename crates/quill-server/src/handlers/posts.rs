//! Posts API endpoints.
//!
//! List and detail endpoints over the content pipeline. Responses are
//! cached as serialized JSON; the listing and each post get their own
//! key and TTL. Upstream calls run on the blocking pool since the
//! transport client is synchronous.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use quill_content::{Post, PostSummary, assemble, page_slug, summarize};
use quill_notion::ContentSource;
use serde::Serialize;
use tokio::task;
use tracing::info;

use crate::error::ServerError;
use crate::state::AppState;

/// Cache key for the posts listing.
const POSTS_LIST_KEY: &str = "posts_list";

/// Response for GET /posts.
#[derive(Serialize)]
struct PostsResponse {
    /// Listing entries, newest first (transport order).
    posts: Vec<PostSummary>,
    /// Number of entries.
    total: usize,
}

/// Handle GET /posts.
pub(crate) async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    if state.cache_enabled
        && let Some(cached) = state.cache.get(POSTS_LIST_KEY)
    {
        info!("Returning cached posts list");
        return Ok(Json(cached));
    }

    info!("Fetching posts from the content store");

    let source = Arc::clone(&state.source);
    let pages = task::spawn_blocking(move || source.query_published_pages()).await??;

    let posts: Vec<PostSummary> = pages.iter().map(summarize).collect();
    let total = posts.len();
    let response = serde_json::to_value(PostsResponse { posts, total })?;

    if state.cache_enabled {
        state
            .cache
            .set_with_ttl(POSTS_LIST_KEY, response.clone(), state.posts_ttl);
    }

    info!("Fetched and cached {} posts", total);
    Ok(Json(response))
}

/// Handle GET /posts/{slug}.
pub(crate) async fn get_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let cache_key = format!("post_{slug}");

    if state.cache_enabled
        && let Some(cached) = state.cache.get(&cache_key)
    {
        info!("Returning cached post: {}", slug);
        return Ok(Json(cached));
    }

    info!("Fetching post with slug: {}", slug);

    let source = Arc::clone(&state.source);
    let post = {
        let slug = slug.clone();
        task::spawn_blocking(move || -> Result<Post, ServerError> {
            let pages = source.query_published_pages()?;
            let page = pages
                .iter()
                .find(|page| page_slug(page) == slug)
                .ok_or(ServerError::PostNotFound(slug))?;
            Ok(assemble(page, source.as_ref())?)
        })
        .await??
    };

    let response = serde_json::to_value(&post)?;

    if state.cache_enabled {
        state
            .cache
            .set_with_ttl(&cache_key, response.clone(), state.post_ttl);
    }

    info!("Fetched and cached post: {}", post.title);
    Ok(Json(response))
}
