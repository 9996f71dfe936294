//! Page assembly.
//!
//! Orchestrates the pipeline for one page: fetch the top-level block
//! sequence once, resolve the cover, render the markdown body, and run
//! every property extractor over the page's property map.
//!
//! Assembly is all-or-nothing: a failed block fetch fails the whole
//! page and no partial post is produced.

use quill_notion::types::{Block, BlockKind, Page};
use quill_notion::{ContentSource, NotionError};
use tracing::debug;

use crate::blocks::render_blocks;
use crate::extract;
use crate::post::{Post, PostSummary};

// Property names as they appear in the blog database.
const TITLE: &str = "Title";
const SLUG: &str = "Slug";
const DATE: &str = "Date";
const EXCERPT: &str = "Excerpt";
const COVER: &str = "Cover";
const PUBLISHED: &str = "Published";
const TAGS: &str = "Tags";
const CATEGORY: &str = "Category";
const STATUS: &str = "Status";
const AUTHORS: &str = "Authors";
const ATTACHMENTS: &str = "Attachments";
const RELATED: &str = "Related";
const CANONICAL_URL: &str = "Canonical URL";
const FEATURED: &str = "Featured";
const READING_TIME: &str = "Reading Time";
const COMMENTS: &str = "Comments";
const CREATED_BY: &str = "Created By";
const LAST_EDITED_BY: &str = "Last Edited By";
const CREATED_TIME: &str = "Created Time";
const LAST_EDITED_TIME: &str = "Last Edited Time";

/// Extract the lookup slug from a page's properties.
#[must_use]
pub fn page_slug(page: &Page) -> String {
    extract::rich_text(page.property(SLUG))
}

/// Build a listing entry from page properties alone.
#[must_use]
pub fn summarize(page: &Page) -> PostSummary {
    PostSummary {
        id: page.id.clone(),
        title: extract::title(page.property(TITLE)),
        slug: page_slug(page),
        date: extract::date(page.property(DATE)),
        excerpt: extract::rich_text(page.property(EXCERPT)),
        cover: extract::cover(page.property(COVER)),
        published: extract::checkbox(page.property(PUBLISHED)),
        tags: extract::multi_select(page.property(TAGS)),
        category: extract::select(page.property(CATEGORY)),
    }
}

/// Assemble the full post for a page.
///
/// Fetches the page's top-level blocks once, then derives everything from
/// that single snapshot: the cover (property first, first image block as
/// fallback), the rendered markdown body, and all extracted properties.
///
/// # Errors
///
/// Returns [`NotionError`] when the block fetch (or a nested table fetch)
/// fails. No partial post is returned.
pub fn assemble(page: &Page, source: &dyn ContentSource) -> Result<Post, NotionError> {
    let blocks = source.list_block_children(&page.id)?;
    debug!("Assembling page {} from {} blocks", page.id, blocks.len());

    let mut cover = extract::cover(page.property(COVER));
    if cover.is_empty() {
        cover = first_image_url(&blocks);
    }

    let content = render_blocks(&blocks, source)?;

    Ok(Post {
        id: page.id.clone(),
        title: extract::title(page.property(TITLE)),
        slug: page_slug(page),
        date: extract::date(page.property(DATE)),
        excerpt: extract::rich_text(page.property(EXCERPT)),
        cover,
        published: extract::checkbox(page.property(PUBLISHED)),
        content,
        tags: extract::multi_select(page.property(TAGS)),
        category: extract::select(page.property(CATEGORY)),
        status: extract::status(page.property(STATUS)),
        authors: extract::people(page.property(AUTHORS)),
        attachments: extract::files(page.property(ATTACHMENTS)),
        related: extract::relation(page.property(RELATED)),
        canonical_url: extract::url(page.property(CANONICAL_URL)),
        featured: extract::checkbox(page.property(FEATURED)),
        reading_time: extract::formula(page.property(READING_TIME))
            .as_f64()
            .unwrap_or(0.0),
        comment_count: extract::rollup(page.property(COMMENTS))
            .as_f64()
            .unwrap_or(0.0),
        created_by: extract::created_by(page.property(CREATED_BY)),
        last_edited_by: extract::last_edited_by(page.property(LAST_EDITED_BY)),
        created_time: extract::created_time(page.property(CREATED_TIME)),
        last_edited_time: extract::last_edited_time(page.property(LAST_EDITED_TIME)),
    })
}

/// URL of the first image-kind block, `""` when there is none.
fn first_image_url(blocks: &[Block]) -> String {
    blocks
        .iter()
        .find_map(|block| match &block.kind {
            BlockKind::Image { image } => Some(image.source.url().to_owned()),
            _ => None,
        })
        .unwrap_or_default()
}
