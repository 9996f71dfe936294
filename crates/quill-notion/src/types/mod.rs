//! Notion API types.
//!
//! Wire records are deserialized permissively: payload sub-fields carry
//! `#[serde(default)]` and kind-tagged enums fall back to an `Unknown`
//! variant, so partially-filled records read as empty rather than failing
//! the whole response.

mod block;
mod file;
mod page;
mod rich_text;

pub use block::{Block, BlockKind, CodeBlock, ImageBlock, TableBlock, TableRowBlock, TextBlock};
pub use file::{ExternalFile, FileRef, HostedFile, User};
pub use page::{
    DateValue, FormulaValue, Page, PropertyValue, RelationRef, RollupValue, SelectValue,
};
pub use rich_text::{Annotations, RichText, TextContent};

use serde::Deserialize;

/// One page of a paginated Notion list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// Records in this page, in store-native order.
    #[serde(default)]
    pub results: Vec<T>,
    /// Whether further pages exist.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next page (present when `has_more` is true).
    #[serde(default)]
    pub next_cursor: Option<String>,
}
