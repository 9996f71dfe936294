//! Content extraction and rendering pipeline for Quill.
//!
//! Walks the heterogeneous, kind-tagged property and block records the
//! Notion transport returns and deterministically renders them into (a) a
//! normalized post record and (b) a markdown document.
//!
//! # Architecture
//!
//! ```text
//! ContentSource ──query──► Page records
//!                              │
//!                              ▼
//!                        assemble()  ──────► Post
//!                         │      │
//!            extract::*  ◄┘      └►  blocks::render_blocks()
//!         (property map)               │          │
//!                                      │          └► richtext::compose()
//!                                      └► ContentSource::list_block_children
//!                                         (tables only, one level deep)
//! ```
//!
//! Every stage is pure and total for expected shapes: missing or partial
//! fields resolve to the kind's zero value, never to an error. The only
//! fallible boundary is the transport itself; a failed children fetch
//! fails the whole assembly, so partial posts are never produced.

pub mod blocks;
pub mod extract;
pub mod richtext;

mod assemble;
mod post;

pub use assemble::{assemble, page_slug, summarize};
pub use post::{Post, PostSummary};
