//! Rich text composition.
//!
//! Renders an ordered sequence of inline spans into a single markdown
//! string. Formatting wrappers nest in a fixed order (bold, italic,
//! code, strikethrough) and a link always wraps its own span last, so
//! the link delimiters are outermost.
//!
//! Literal markdown metacharacters in span text are not escaped. That
//! matches the upstream service this API replaces; see DESIGN.md before
//! changing it.

use quill_notion::types::RichText;

/// Compose inline spans into one markdown string.
///
/// Spans are contiguous inline runs: rendered texts are concatenated with
/// no separator. Empty input yields the empty string.
#[must_use]
pub fn compose(spans: &[RichText]) -> String {
    let mut out = String::new();

    for span in spans {
        let mut text = span.content().to_owned();
        let annotations = span.annotations;

        if annotations.bold {
            text = format!("**{text}**");
        }
        if annotations.italic {
            text = format!("*{text}*");
        }
        if annotations.code {
            text = format!("`{text}`");
        }
        if annotations.strikethrough {
            text = format!("~~{text}~~");
        }

        // Link wrapping is always outermost.
        if let Some(href) = &span.href {
            text = format!("[{text}]({href})");
        }

        out.push_str(&text);
    }

    out
}
