//! Block rendering.
//!
//! One rendering rule per block kind, each producing zero or one markdown
//! fragment. The document is the non-empty fragments joined by a blank
//! line, in exactly the input order: no reordering, no deduplication.
//!
//! Two quirks are kept on purpose (see DESIGN.md): numbered list items
//! always render as `1. ` without a running counter, and code/text is
//! never re-escaped.

use quill_notion::types::{Block, BlockKind};
use quill_notion::{ContentSource, NotionError};

use crate::richtext::compose;

/// Render a block sequence into one markdown document.
///
/// Fragments are joined with a blank line between them. Blocks that render
/// no fragment (blank paragraphs, unknown kinds, empty tables) contribute
/// nothing, not even an empty line.
///
/// # Errors
///
/// Returns [`NotionError`] when a nested children fetch fails (tables).
pub fn render_blocks(blocks: &[Block], source: &dyn ContentSource) -> Result<String, NotionError> {
    let mut fragments = Vec::new();

    for block in blocks {
        if let Some(fragment) = render_block(block, source)? {
            fragments.push(fragment);
        }
    }

    Ok(fragments.join("\n\n"))
}

/// Render a single block into zero or one markdown fragment.
///
/// The `table` rule issues one children fetch for its row blocks; no other
/// kind fetches. Unknown kinds are silently skipped.
///
/// # Errors
///
/// Returns [`NotionError`] when the children fetch fails.
pub fn render_block(
    block: &Block,
    source: &dyn ContentSource,
) -> Result<Option<String>, NotionError> {
    let fragment = match &block.kind {
        BlockKind::Paragraph { paragraph } => {
            let text = compose(&paragraph.rich_text);
            if text.trim().is_empty() {
                None
            } else {
                Some(text)
            }
        }
        BlockKind::Heading1 { heading } => Some(format!("# {}", compose(&heading.rich_text))),
        BlockKind::Heading2 { heading } => Some(format!("## {}", compose(&heading.rich_text))),
        BlockKind::Heading3 { heading } => Some(format!("### {}", compose(&heading.rich_text))),
        BlockKind::BulletedListItem { bulleted_list_item } => {
            Some(format!("- {}", compose(&bulleted_list_item.rich_text)))
        }
        // Every item renders as "1."; the counter never advances.
        BlockKind::NumberedListItem { numbered_list_item } => {
            Some(format!("1. {}", compose(&numbered_list_item.rich_text)))
        }
        BlockKind::Code { code } => Some(format!(
            "```{}\n{}\n```",
            code.language,
            compose(&code.rich_text)
        )),
        BlockKind::Image { image } => {
            let caption = compose(&image.caption);
            Some(format!("![{}]({})", caption, image.source.url()))
        }
        BlockKind::Quote { quote } => Some(format!("> {}", compose(&quote.rich_text))),
        BlockKind::Divider => Some("---".to_owned()),
        BlockKind::Table { .. } => render_table(block, source)?,
        BlockKind::TableRow { .. } | BlockKind::Unknown => None,
    };

    Ok(fragment)
}

/// Render a table block by fetching its row children.
///
/// The first row is the header; a separator row of `---` cells matching
/// the header width follows; remaining rows keep their order. A table
/// with no rows renders no fragment.
fn render_table(block: &Block, source: &dyn ContentSource) -> Result<Option<String>, NotionError> {
    let children = source.list_block_children(&block.id)?;

    let rows: Vec<Vec<String>> = children
        .iter()
        .filter_map(|child| match &child.kind {
            BlockKind::TableRow { table_row } => {
                Some(table_row.cells.iter().map(|cell| compose(cell)).collect())
            }
            _ => None,
        })
        .collect();

    let Some(header) = rows.first() else {
        return Ok(None);
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header.join(" | "));
    lines.push(vec!["---"; header.len()].join(" | "));
    for row in &rows[1..] {
        lines.push(row.join(" | "));
    }

    Ok(Some(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use quill_notion::types::Page;
    use serde_json::json;

    use super::*;

    /// In-memory source: block children keyed by parent id.
    struct FakeSource {
        children: HashMap<String, Vec<Block>>,
    }

    impl FakeSource {
        fn empty() -> Self {
            Self {
                children: HashMap::new(),
            }
        }

        fn with(parent: &str, blocks: serde_json::Value) -> Self {
            let mut children = HashMap::new();
            children.insert(parent.to_owned(), parse_blocks(blocks));
            Self { children }
        }
    }

    impl ContentSource for FakeSource {
        fn query_published_pages(&self) -> Result<Vec<Page>, NotionError> {
            Ok(Vec::new())
        }

        fn list_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
            Ok(self.children.get(block_id).cloned().unwrap_or_default())
        }
    }

    fn parse_blocks(value: serde_json::Value) -> Vec<Block> {
        serde_json::from_value(value).unwrap()
    }

    fn text_block(id: &str, kind: &str, content: &str) -> serde_json::Value {
        json!({
            "id": id,
            "type": kind,
            kind: {"rich_text": [{"text": {"content": content}}]}
        })
    }

    #[test]
    fn test_document_joins_fragments_with_blank_lines() {
        let blocks = parse_blocks(json!([
            text_block("b1", "heading_1", "Title"),
            text_block("b2", "paragraph", "Body text."),
            text_block("b3", "quote", "Said so.")
        ]));

        let doc = render_blocks(&blocks, &FakeSource::empty()).unwrap();

        assert_eq!(doc, "# Title\n\nBody text.\n\n> Said so.");
    }

    #[test]
    fn test_blank_paragraphs_are_dropped() {
        let blocks = parse_blocks(json!([
            text_block("b1", "paragraph", "One"),
            text_block("b2", "paragraph", "   "),
            text_block("b3", "paragraph", "Two")
        ]));

        let doc = render_blocks(&blocks, &FakeSource::empty()).unwrap();

        assert_eq!(doc, "One\n\nTwo");
    }

    #[test]
    fn test_heading_levels() {
        let source = FakeSource::empty();
        let blocks = parse_blocks(json!([
            text_block("b1", "heading_1", "One"),
            text_block("b2", "heading_2", "Two"),
            text_block("b3", "heading_3", "Three")
        ]));

        assert_eq!(
            render_blocks(&blocks, &source).unwrap(),
            "# One\n\n## Two\n\n### Three"
        );
    }

    #[test]
    fn test_numbered_list_items_do_not_increment() {
        let blocks = parse_blocks(json!([
            text_block("b1", "numbered_list_item", "A"),
            text_block("b2", "numbered_list_item", "B")
        ]));

        let doc = render_blocks(&blocks, &FakeSource::empty()).unwrap();

        assert_eq!(doc, "1. A\n\n1. B");
    }

    #[test]
    fn test_bulleted_list_item() {
        let blocks = parse_blocks(json!([text_block("b1", "bulleted_list_item", "point")]));

        assert_eq!(
            render_blocks(&blocks, &FakeSource::empty()).unwrap(),
            "- point"
        );
    }

    #[test]
    fn test_code_fence_keeps_raw_text_and_language() {
        let blocks = parse_blocks(json!([{
            "id": "b1",
            "type": "code",
            "code": {
                "rich_text": [{"text": {"content": "let x = a < b;"}}],
                "language": "rust"
            }
        }]));

        let doc = render_blocks(&blocks, &FakeSource::empty()).unwrap();

        assert_eq!(doc, "```rust\nlet x = a < b;\n```");
    }

    #[test]
    fn test_code_fence_with_empty_language() {
        let blocks = parse_blocks(json!([{
            "id": "b1",
            "type": "code",
            "code": {"rich_text": [{"text": {"content": "plain"}}]}
        }]));

        assert_eq!(
            render_blocks(&blocks, &FakeSource::empty()).unwrap(),
            "```\nplain\n```"
        );
    }

    #[test]
    fn test_image_with_caption() {
        let blocks = parse_blocks(json!([{
            "id": "b1",
            "type": "image",
            "image": {
                "type": "external",
                "external": {"url": "https://cdn.example/p.png"},
                "caption": [{"text": {"content": "the caption"}}]
            }
        }]));

        assert_eq!(
            render_blocks(&blocks, &FakeSource::empty()).unwrap(),
            "![the caption](https://cdn.example/p.png)"
        );
    }

    #[test]
    fn test_divider_renders_rule() {
        let blocks = parse_blocks(json!([{"id": "b1", "type": "divider", "divider": {}}]));

        assert_eq!(render_blocks(&blocks, &FakeSource::empty()).unwrap(), "---");
    }

    #[test]
    fn test_unknown_kinds_render_nothing() {
        let blocks = parse_blocks(json!([
            text_block("b1", "paragraph", "kept"),
            {"id": "b2", "type": "synced_block", "synced_block": {}},
            {"id": "b3", "type": "toggle", "toggle": {"rich_text": []}}
        ]));

        assert_eq!(render_blocks(&blocks, &FakeSource::empty()).unwrap(), "kept");
    }

    #[test]
    fn test_table_renders_header_separator_and_rows() {
        let source = FakeSource::with(
            "t1",
            json!([
                {"id": "r1", "type": "table_row", "table_row": {"cells": [
                    [{"text": {"content": "Name"}}],
                    [{"text": {"content": "Role"}}]
                ]}},
                {"id": "r2", "type": "table_row", "table_row": {"cells": [
                    [{"text": {"content": "Ada"}}],
                    [{"text": {"content": "Engineer"}}]
                ]}}
            ]),
        );
        let blocks = parse_blocks(json!([
            text_block("b1", "paragraph", "Before"),
            {"id": "t1", "type": "table", "table": {"table_width": 2, "has_column_header": true}},
            text_block("b2", "paragraph", "After")
        ]));

        let doc = render_blocks(&blocks, &source).unwrap();

        assert_eq!(
            doc,
            "Before\n\nName | Role\n--- | ---\nAda | Engineer\n\nAfter"
        );
    }

    #[test]
    fn test_table_with_no_rows_renders_nothing() {
        let blocks = parse_blocks(json!([
            {"id": "t1", "type": "table", "table": {"table_width": 2}},
            text_block("b1", "paragraph", "tail")
        ]));

        let doc = render_blocks(&blocks, &FakeSource::empty()).unwrap();

        assert_eq!(doc, "tail");
    }

    #[test]
    fn test_table_cells_are_composed() {
        let source = FakeSource::with(
            "t1",
            json!([
                {"id": "r1", "type": "table_row", "table_row": {"cells": [
                    [{"text": {"content": "bold"}, "annotations": {"bold": true}}]
                ]}}
            ]),
        );
        let blocks =
            parse_blocks(json!([{"id": "t1", "type": "table", "table": {"table_width": 1}}]));

        assert_eq!(
            render_blocks(&blocks, &source).unwrap(),
            "**bold**\n---"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let blocks = parse_blocks(json!([
            text_block("b1", "numbered_list_item", "A"),
            text_block("b2", "numbered_list_item", "B"),
            text_block("b3", "paragraph", "tail")
        ]));
        let source = FakeSource::empty();

        let first = render_blocks(&blocks, &source).unwrap();
        let second = render_blocks(&blocks, &source).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_children_fetch_propagates() {
        struct FailingSource;

        impl ContentSource for FailingSource {
            fn query_published_pages(&self) -> Result<Vec<Page>, NotionError> {
                Ok(Vec::new())
            }

            fn list_block_children(&self, _block_id: &str) -> Result<Vec<Block>, NotionError> {
                Err(NotionError::HttpResponse {
                    status: 502,
                    body: "bad gateway".to_owned(),
                })
            }
        }

        let blocks =
            parse_blocks(json!([{"id": "t1", "type": "table", "table": {"table_width": 1}}]));

        let result = render_blocks(&blocks, &FailingSource);

        assert!(matches!(
            result,
            Err(NotionError::HttpResponse { status: 502, .. })
        ));
    }
}
