//! Markdown rendering for cssdoc sections.
//!
//! This crate turns the Markdown body of a documentation comment into an HTML
//! fragment:
//!
//! - [`extract_examples`] sets ```` ```example ```` fences aside as live markup
//! - [`MarkdownRenderer`] renders CommonMark plus GFM tables, strikethrough and
//!   task lists, passing code blocks through a [`Highlighter`]
//! - [`add_highlight_class`] marks bare `<pre>` tags for highlight themes
//!
//! [`ContentTransformer`] runs the three in order.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cssdoc_renderer::{AutoHighlighter, ContentTransformer};
//!
//! let transformer = ContentTransformer::new(Arc::new(AutoHighlighter::new()));
//! let result = transformer.transform("```example\n<b>hi</b>\n```");
//! assert!(result.html.contains(r#"<div class="doc-example"><b>hi</b>"#));
//! ```

mod code_block;
mod example;
mod highlight;
mod renderer;
mod state;
mod transform;
mod util;

pub use example::{EXAMPLE_CLASS, ExtractedExamples, extract_examples, rewrite_examples};
pub use highlight::{
    AutoHighlighter, HighlightError, Highlighted, Highlighter, Language, MAX_HIGHLIGHT_BYTES,
    PlainHighlighter,
};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html};
pub use transform::{ContentTransformer, add_highlight_class};
pub use util::slugify;
