//! Content source abstraction.
//!
//! The content pipeline consumes the document store through this trait so
//! renderer and assembler logic can be exercised against an in-memory fake
//! without touching the network.

use crate::error::NotionError;
use crate::types::{Block, Page};

/// The two transport capabilities the content pipeline needs.
pub trait ContentSource: Send + Sync {
    /// Fetch the filtered, sorted set of publishable page records.
    ///
    /// Filter: boolean property "Published" == true. Sort: property "Date"
    /// descending. Callers preserve the returned order; they never re-sort.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] when the upstream store cannot be queried.
    fn query_published_pages(&self) -> Result<Vec<Page>, NotionError>;

    /// Fetch the direct children of a page or block, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] when the upstream store cannot be queried.
    fn list_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError>;
}
