//! Comment body to section HTML.
//!
//! The transformation runs three passes in a fixed order:
//!
//! 1. example fences are set aside as raw `doc-example` containers,
//! 2. the rest is rendered as Markdown with highlighted code blocks and the
//!    containers are put back verbatim,
//! 3. every bare `<pre>` gets the `hljs` class.

use std::sync::Arc;

use crate::example::extract_examples;
use crate::highlight::Highlighter;
use crate::renderer::{MarkdownRenderer, RenderResult};

/// Opening tag rewritten by [`add_highlight_class`].
const BARE_PRE: &str = "<pre>";
const HIGHLIGHT_PRE: &str = r#"<pre class="hljs">"#;

/// Turns comment bodies into HTML fragments.
///
/// Cheap to clone; the highlighter is shared.
#[derive(Clone)]
pub struct ContentTransformer {
    highlighter: Arc<dyn Highlighter>,
}

impl ContentTransformer {
    /// Create a transformer using `highlighter` for code blocks.
    #[must_use]
    pub fn new(highlighter: Arc<dyn Highlighter>) -> Self {
        Self { highlighter }
    }

    /// Transform a body without heading id namespacing.
    #[must_use]
    pub fn transform(&self, body: &str) -> RenderResult {
        Self::run(MarkdownRenderer::new(Arc::clone(&self.highlighter)), body)
    }

    /// Transform a section body, prefixing heading ids with `section_id`.
    #[must_use]
    pub fn transform_section(&self, body: &str, section_id: &str) -> RenderResult {
        Self::run(
            MarkdownRenderer::new(Arc::clone(&self.highlighter)).with_heading_prefix(section_id),
            body,
        )
    }

    fn run(mut renderer: MarkdownRenderer, body: &str) -> RenderResult {
        let examples = extract_examples(body);
        let mut result = renderer.render_markdown(&examples.text);
        result.html = add_highlight_class(&examples.restore(&result.html));
        result
    }
}

impl std::fmt::Debug for ContentTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentTransformer").finish_non_exhaustive()
    }
}

/// Replace every attribute-less `<pre>` with `<pre class="hljs">`.
///
/// Only the exact `<pre>` form is matched; tags that already carry attributes
/// are left alone.
#[must_use]
pub fn add_highlight_class(html: &str) -> String {
    html.replace(BARE_PRE, HIGHLIGHT_PRE)
}
