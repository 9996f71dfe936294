//! Notion REST API integration for Quill.
//!
//! Provides a sync HTTP client for the Notion API together with the serde
//! data model for the records it returns (pages, property values, blocks,
//! rich text). The rest of the workspace consumes Notion through the
//! [`ContentSource`] trait, which exposes exactly the two capabilities the
//! content pipeline needs:
//!
//! - [`ContentSource::query_published_pages`]: the filtered, sorted set of
//!   page records that are candidates for publishing
//! - [`ContentSource::list_block_children`]: the direct child blocks of a
//!   page or block, in store-native order
//!
//! Both operations follow Notion cursor pagination, so long databases and
//! long pages are read completely. The client performs no retries; the
//! first upstream failure surfaces as a [`NotionError`].

mod client;
mod error;
mod source;
pub mod types;

pub use client::NotionClient;
pub use error::NotionError;
pub use source::ContentSource;
