//! Live example blocks.
//!
//! A fence opened with ```` ```example ```` holds markup meant to be shown
//! rendered, not listed. Its contents must reach the page untouched, blank
//! lines and indentation included, so the Markdown pass never sees them:
//! [`extract_examples`] swaps each block for a placeholder paragraph and
//! [`ExtractedExamples::restore`] puts the raw container back afterwards.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// CSS class of the container wrapping example markup.
pub const EXAMPLE_CLASS: &str = "doc-example";

/// Shortest match from the `example` opener to the next fence marker.
static EXAMPLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```example([\s\S]+?)```").unwrap());

/// Replace every example fence with `<div class="doc-example">…</div>`.
///
/// The `example` marker and the closing fence are dropped along with a single
/// newline directly after the marker. Everything else is inserted verbatim.
///
/// Returns the input unchanged (borrowed) when there is no example fence.
#[must_use]
pub fn rewrite_examples(body: &str) -> Cow<'_, str> {
    EXAMPLE_BLOCK.replace_all(body, |caps: &Captures<'_>| container(&caps[1]))
}

/// Markdown source with example blocks set aside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedExamples {
    /// Source with one placeholder paragraph per example.
    pub text: String,
    /// Example containers, indexed by placeholder number.
    blocks: Vec<String>,
}

/// Set example fences aside so Markdown cannot reinterpret their contents.
///
/// Each fence becomes a paragraph holding only a placeholder token. Call
/// [`ExtractedExamples::restore`] on the rendered HTML to put the containers
/// back.
#[must_use]
pub fn extract_examples(body: &str) -> ExtractedExamples {
    let mut blocks = Vec::new();
    let text = EXAMPLE_BLOCK.replace_all(body, |caps: &Captures<'_>| {
        let token = placeholder(blocks.len());
        blocks.push(container(&caps[1]));
        format!("\n\n{token}\n\n")
    });
    ExtractedExamples {
        text: text.into_owned(),
        blocks,
    }
}

impl ExtractedExamples {
    /// Number of examples set aside.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Swap placeholders in rendered `html` for the raw example containers.
    ///
    /// The paragraph wrapping a placeholder is dropped with it; a placeholder
    /// rendered without one (tight list items) is replaced on its own.
    #[must_use]
    pub fn restore(&self, html: &str) -> String {
        let mut out = html.to_owned();
        for (index, block) in self.blocks.iter().enumerate() {
            let token = placeholder(index);
            let wrapped = format!("<p>{token}</p>");
            out = if out.contains(&wrapped) {
                out.replacen(&wrapped, block, 1)
            } else {
                out.replacen(&token, block, 1)
            };
        }
        out
    }
}

/// Token that survives Markdown rendering unchanged.
fn placeholder(index: usize) -> String {
    format!("cssdoc-example-{index}-placeholder")
}

/// Wrap fence contents, minus the newline after the `example` marker.
fn container(inner: &str) -> String {
    let inner = inner
        .strip_prefix("\r\n")
        .or_else(|| inner.strip_prefix('\n'))
        .unwrap_or(inner);
    format!(r#"<div class="{EXAMPLE_CLASS}">{inner}</div>"#)
}
