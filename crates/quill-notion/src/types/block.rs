//! Notion block types.

use serde::{Deserialize, Serialize};

use super::file::FileRef;
use super::rich_text::RichText;

/// One content block within a page.
///
/// Sibling blocks form an ordered sequence; the renderer preserves that
/// order exactly.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Block {
    /// Block ID, used to fetch children.
    #[serde(default)]
    pub id: String,
    /// Whether the block has child blocks.
    #[serde(default)]
    pub has_children: bool,
    /// Kind-tagged payload.
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// A kind-tagged block payload.
///
/// Kinds the renderer does not handle deserialize as
/// [`BlockKind::Unknown`] and render no fragment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Paragraph.
    Paragraph {
        /// Text payload.
        #[serde(default)]
        paragraph: TextBlock,
    },
    /// Level-1 heading.
    #[serde(rename = "heading_1")]
    Heading1 {
        /// Text payload.
        #[serde(default, rename = "heading_1")]
        heading: TextBlock,
    },
    /// Level-2 heading.
    #[serde(rename = "heading_2")]
    Heading2 {
        /// Text payload.
        #[serde(default, rename = "heading_2")]
        heading: TextBlock,
    },
    /// Level-3 heading.
    #[serde(rename = "heading_3")]
    Heading3 {
        /// Text payload.
        #[serde(default, rename = "heading_3")]
        heading: TextBlock,
    },
    /// Bulleted list item.
    BulletedListItem {
        /// Text payload.
        #[serde(default)]
        bulleted_list_item: TextBlock,
    },
    /// Numbered list item.
    NumberedListItem {
        /// Text payload.
        #[serde(default)]
        numbered_list_item: TextBlock,
    },
    /// Fenced code block.
    Code {
        /// Code payload.
        #[serde(default)]
        code: CodeBlock,
    },
    /// Image.
    Image {
        /// Image payload.
        #[serde(default)]
        image: ImageBlock,
    },
    /// Quote.
    Quote {
        /// Text payload.
        #[serde(default)]
        quote: TextBlock,
    },
    /// Horizontal divider.
    Divider,
    /// Table; rows are child `table_row` blocks fetched separately.
    Table {
        /// Table payload.
        #[serde(default)]
        table: TableBlock,
    },
    /// One table row.
    TableRow {
        /// Row payload.
        #[serde(default)]
        table_row: TableRowBlock,
    },
    /// Any block kind the renderer does not handle.
    #[serde(other)]
    #[default]
    Unknown,
}

/// Payload of text-bearing blocks (paragraph, headings, list items, quote).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextBlock {
    /// Text runs.
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// Payload of a code block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CodeBlock {
    /// Code text runs.
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    /// Language tag for the fence (may be empty).
    #[serde(default)]
    pub language: String,
}

/// Payload of an image block: a file reference plus an optional caption.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageBlock {
    /// Caption text runs.
    #[serde(default)]
    pub caption: Vec<RichText>,
    /// File reference (`type` discriminator plus branch).
    #[serde(flatten)]
    pub source: FileRef,
}

/// Payload of a table block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TableBlock {
    /// Column count as reported by the store.
    #[serde(default)]
    pub table_width: usize,
    /// Whether the first row is a header row.
    #[serde(default)]
    pub has_column_header: bool,
}

/// Payload of a table row: one rich-text sequence per cell.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TableRowBlock {
    /// Cells in column order.
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_block_deserializes() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "type": "paragraph",
            "paragraph": {"rich_text": [{"text": {"content": "hello"}}]}
        }))
        .unwrap();

        assert_eq!(block.id, "b1");
        let BlockKind::Paragraph { paragraph } = &block.kind else {
            panic!("expected paragraph");
        };
        assert_eq!(paragraph.rich_text[0].content(), "hello");
    }

    #[test]
    fn test_heading_tags_keep_underscored_names() {
        let block: Block = serde_json::from_value(json!({
            "id": "b2",
            "type": "heading_2",
            "heading_2": {"rich_text": [{"text": {"content": "Section"}}]}
        }))
        .unwrap();

        assert!(matches!(block.kind, BlockKind::Heading2 { .. }));
    }

    #[test]
    fn test_image_block_resolves_external_url() {
        let block: Block = serde_json::from_value(json!({
            "id": "b3",
            "type": "image",
            "image": {
                "type": "external",
                "external": {"url": "https://cdn.example/pic.png"},
                "caption": [{"text": {"content": "a pic"}}]
            }
        }))
        .unwrap();

        let BlockKind::Image { image } = &block.kind else {
            panic!("expected image");
        };
        assert_eq!(image.source.url(), "https://cdn.example/pic.png");
        assert_eq!(image.caption[0].content(), "a pic");
    }

    #[test]
    fn test_unsupported_kind_falls_back_to_unknown() {
        let block: Block = serde_json::from_value(json!({
            "id": "b4",
            "type": "child_database",
            "child_database": {"title": "Inner"}
        }))
        .unwrap();

        assert!(matches!(block.kind, BlockKind::Unknown));
    }

    #[test]
    fn test_table_row_cells() {
        let block: Block = serde_json::from_value(json!({
            "id": "r1",
            "type": "table_row",
            "table_row": {"cells": [
                [{"text": {"content": "Name"}}],
                [{"text": {"content": "Role"}}]
            ]}
        }))
        .unwrap();

        let BlockKind::TableRow { table_row } = &block.kind else {
            panic!("expected table_row");
        };
        assert_eq!(table_row.cells.len(), 2);
    }
}
