//! Notion rich text types.
//!
//! A block's textual content is an ordered sequence of [`RichText`] spans,
//! each carrying inline formatting annotations and an optional hyperlink.

use serde::{Deserialize, Serialize};

/// One inline text span.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RichText {
    /// Literal text payload.
    #[serde(default)]
    pub text: Option<TextContent>,
    /// Inline formatting annotations.
    #[serde(default)]
    pub annotations: Annotations,
    /// Link target, if the span is a hyperlink.
    #[serde(default)]
    pub href: Option<String>,
}

impl RichText {
    /// The span's literal content, `""` when the text payload is absent.
    #[must_use]
    pub fn content(&self) -> &str {
        self.text.as_ref().map_or("", |t| t.content.as_str())
    }
}

/// Literal text payload of a span.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextContent {
    /// The text itself.
    #[serde(default)]
    pub content: String,
}

/// Inline formatting flags.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct Annotations {
    /// Bold text.
    #[serde(default)]
    pub bold: bool,
    /// Italic text.
    #[serde(default)]
    pub italic: bool,
    /// Inline code.
    #[serde(default)]
    pub code: bool,
    /// Strikethrough text.
    #[serde(default)]
    pub strikethrough: bool,
}
