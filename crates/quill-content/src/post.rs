//! Normalized post records.

use serde::Serialize;

/// A fully assembled post: metadata plus rendered markdown content.
///
/// Built once per page fetch by [`assemble`](crate::assemble) and immutable
/// afterwards; the HTTP layer serializes it and the cache stores it
/// opaquely.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Source page ID.
    pub id: String,
    /// Post title.
    pub title: String,
    /// URL slug used for per-post lookup.
    pub slug: String,
    /// Publication date (ISO 8601, date portion).
    pub date: String,
    /// Short summary for listings.
    pub excerpt: String,
    /// Cover image URL (`""` when the post has none).
    pub cover: String,
    /// Published flag.
    pub published: bool,
    /// Rendered markdown body.
    pub content: String,

    /// Tag names, in store order.
    pub tags: Vec<String>,
    /// Category name.
    pub category: String,
    /// Editorial status name.
    pub status: String,
    /// Author display names, in store order.
    pub authors: Vec<String>,
    /// Attachment URLs, in store order.
    pub attachments: Vec<String>,
    /// Related page ids, in store order.
    pub related: Vec<String>,
    /// Canonical URL when the post is syndicated.
    pub canonical_url: String,
    /// Featured flag.
    pub featured: bool,
    /// Estimated reading time in minutes (formula property).
    pub reading_time: f64,
    /// Comment count (rollup property).
    pub comment_count: f64,
    /// Creating user's display name.
    pub created_by: String,
    /// Last editing user's display name.
    pub last_edited_by: String,
    /// Creation timestamp (ISO 8601).
    pub created_time: String,
    /// Last edit timestamp (ISO 8601).
    pub last_edited_time: String,
}

/// A post listing entry: properties only, no content fetch.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    /// Source page ID.
    pub id: String,
    /// Post title.
    pub title: String,
    /// URL slug used for per-post lookup.
    pub slug: String,
    /// Publication date (ISO 8601, date portion).
    pub date: String,
    /// Short summary for listings.
    pub excerpt: String,
    /// Cover image URL from the cover property. `""` when unset; the
    /// first-image fallback needs block content and only applies to
    /// detail assembly.
    pub cover: String,
    /// Published flag.
    pub published: bool,
    /// Tag names, in store order.
    pub tags: Vec<String>,
    /// Category name.
    pub category: String,
}
