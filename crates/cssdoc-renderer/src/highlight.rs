//! Syntax highlighting for fenced code blocks.
//!
//! Highlighting is pluggable through the [`Highlighter`] trait. The bundled
//! [`AutoHighlighter`] is a lightweight lexical highlighter for the languages that
//! show up in stylesheet documentation (CSS and its preprocessors, HTML, JavaScript,
//! shell). It emits `hljs-*` span classes so highlight.js themes style its output.
//!
//! Highlighting is best-effort: unknown languages render as escaped plain text, and
//! a [`HighlightError`] only affects the block that produced it.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::state::escape_html;

/// Default size limit for a single highlighted block.
pub const MAX_HIGHLIGHT_BYTES: usize = 256 * 1024;

/// Highlighted code block content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlighted {
    /// Language used for the `language-*` class, if any.
    pub language: Option<String>,
    /// Escaped HTML, possibly containing `<span class="hljs-*">` tokens.
    pub html: String,
}

/// Error returned when a block cannot be highlighted.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Block is larger than the highlighter accepts.
    #[error("code block of {len} bytes exceeds the {limit} byte highlighting limit")]
    TooLarge {
        /// Block size in bytes.
        len: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Pluggable syntax highlighter.
pub trait Highlighter: Send + Sync {
    /// Highlight `code`, using `language` (the fence info hint) when recognized.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError`] if the block cannot be highlighted. Callers fall
    /// back to escaped plain text for that block.
    fn highlight(&self, code: &str, language: Option<&str>)
    -> Result<Highlighted, HighlightError>;
}

/// Highlighter that only escapes code.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<Highlighted, HighlightError> {
        Ok(Highlighted {
            language: language.map(str::to_owned),
            html: escape_html(code),
        })
    }
}

/// Languages understood by [`AutoHighlighter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    /// CSS, SCSS, Sass, Less, Stylus.
    Css,
    /// HTML, XML, SVG.
    Markup,
    /// JavaScript, JSON, TypeScript.
    JavaScript,
    /// POSIX shells.
    Shell,
}

impl Language {
    /// Resolve a fence info hint such as `scss` or `html`.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.to_ascii_lowercase().as_str() {
            "css" | "scss" | "sass" | "less" | "styl" | "stylus" => Some(Self::Css),
            "html" | "htm" | "xhtml" | "xml" | "svg" | "markup" | "vue" => Some(Self::Markup),
            "js" | "javascript" | "mjs" | "jsx" | "json" | "ts" | "typescript" => {
                Some(Self::JavaScript)
            }
            "sh" | "bash" | "shell" | "zsh" | "console" => Some(Self::Shell),
            _ => None,
        }
    }

    /// Guess the language of an unlabeled block.
    ///
    /// Checks markup, then stylesheet, then script, then shell.
    #[must_use]
    pub fn detect(code: &str) -> Option<Self> {
        let trimmed = code.trim_start();
        if trimmed.starts_with('<') && trimmed.contains('>') {
            Some(Self::Markup)
        } else if CSS_HINT.is_match(code) {
            Some(Self::Css)
        } else if SCRIPT_HINT.is_match(code) {
            Some(Self::JavaScript)
        } else if SHELL_HINT.is_match(code) {
            Some(Self::Shell)
        } else {
            None
        }
    }

    /// Canonical name used in the `language-*` class.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Markup => "html",
            Self::JavaScript => "javascript",
            Self::Shell => "bash",
        }
    }

    fn highlight(self, code: &str) -> String {
        match self {
            Self::Css => tokenize(&CSS, code),
            Self::Markup => highlight_markup(code),
            Self::JavaScript => tokenize(&JAVASCRIPT, code),
            Self::Shell => tokenize(&SHELL, code),
        }
    }
}

/// Lexical highlighter with automatic language detection.
#[derive(Clone, Copy, Debug)]
pub struct AutoHighlighter {
    max_bytes: usize,
}

impl AutoHighlighter {
    /// Create a highlighter with the default size limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_bytes: MAX_HIGHLIGHT_BYTES,
        }
    }

    /// Override the per-block size limit.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

impl Default for AutoHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for AutoHighlighter {
    fn highlight(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<Highlighted, HighlightError> {
        if code.len() > self.max_bytes {
            return Err(HighlightError::TooLarge {
                len: code.len(),
                limit: self.max_bytes,
            });
        }

        // An unrecognized hint means plain text, not a guess.
        let resolved = match language {
            Some(hint) => Language::from_hint(hint),
            None => Language::detect(code),
        };
        let html = match resolved {
            Some(lang) => lang.highlight(code),
            None => escape_html(code),
        };

        Ok(Highlighted {
            language: language
                .map(str::to_owned)
                .or_else(|| resolved.map(|lang| lang.name().to_owned())),
            html,
        })
    }
}

/// Token regex plus the mapping from named groups to `hljs-*` classes.
///
/// Groups not listed in `classes` are consumed without a span (used to swallow
/// identifiers so that digits inside them are not taken for numbers).
struct Grammar {
    pattern: Regex,
    classes: &'static [(&'static str, &'static str)],
}

static CSS_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\{[^{}]*?[A-Za-z-]+\s*:[^;{}]+;|^\s*[$@][\w-]+\s*:").unwrap()
});

static SCRIPT_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:function|var|let|const|return|document|window|console)\b|=>").unwrap()
});

static SHELL_HINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\s*(?:\$\s|#!/)").unwrap());

static CSS: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    pattern: Regex::new(concat!(
        r"(?P<comment>/\*(?s:.*?)\*/|//[^\n]*)",
        r#"|(?P<string>"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#,
        r"|(?P<keyword>@[A-Za-z-]+|!important)",
        r"|(?P<variable>\$[\w-]+|--[\w-]+)",
        r"|(?P<number>#[0-9a-fA-F]{3,8}\b|-?(?:\d+\.?\d*|\.\d+)(?:%|[A-Za-z]+)?)",
        r"|(?P<class>\.[A-Za-z_-][\w-]*)",
        r"|(?P<id>#[A-Za-z_-][\w-]*)",
        r"|(?P<attribute>[A-Za-z-]+)\s*:\s",
        r"|(?P<pseudo>::?[A-Za-z-]+)",
        r"|(?P<plain>[A-Za-z_][\w-]*)",
    ))
    .unwrap(),
    classes: &[
        ("comment", "hljs-comment"),
        ("string", "hljs-string"),
        ("keyword", "hljs-keyword"),
        ("variable", "hljs-variable"),
        ("number", "hljs-number"),
        ("class", "hljs-selector-class"),
        ("id", "hljs-selector-id"),
        ("attribute", "hljs-attribute"),
        ("pseudo", "hljs-selector-pseudo"),
    ],
});

static JAVASCRIPT: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    pattern: Regex::new(concat!(
        r"(?P<comment>//[^\n]*|/\*(?s:.*?)\*/)",
        r#"|(?P<string>"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\.)*`)"#,
        r"|(?P<keyword>\b(?:var|let|const|function|return|if|else|for|while|do|switch|case|break|continue|new|this|typeof|instanceof|in|of|class|extends|import|export|from|default|try|catch|finally|throw|async|await|yield|delete|void)\b)",
        r"|(?P<literal>\b(?:true|false|null|undefined|NaN|Infinity)\b)",
        r"|(?P<number>\b(?:0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b)",
        r"|(?P<plain>[A-Za-z_$][\w$]*)",
    ))
    .unwrap(),
    classes: &[
        ("comment", "hljs-comment"),
        ("string", "hljs-string"),
        ("keyword", "hljs-keyword"),
        ("literal", "hljs-literal"),
        ("number", "hljs-number"),
    ],
});

static SHELL: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    pattern: Regex::new(concat!(
        r"(?P<variable>\$\{[^}\n]*\}|\$[\w@#?*!$-]+)",
        r"|(?P<comment>#[^\n]*)",
        r#"|(?P<string>"(?:[^"\\]|\\.)*"|'[^']*')"#,
        r"|(?P<keyword>\b(?:if|then|else|elif|fi|for|in|do|done|case|esac|while|until|function|return|export|local)\b)",
        r"|(?P<plain>[A-Za-z_][\w-]*)",
    ))
    .unwrap(),
    classes: &[
        ("variable", "hljs-variable"),
        ("comment", "hljs-comment"),
        ("string", "hljs-string"),
        ("keyword", "hljs-keyword"),
    ],
});

/// Top-level markup tokens. Tags are highlighted further with [`TAG`].
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<comment><!--(?s:.*?)-->)|(?P<meta><![A-Za-z][^>]*>)|(?P<tag></?[A-Za-z][^<>]*>?)")
        .unwrap()
});

static TAG: LazyLock<Grammar> = LazyLock::new(|| Grammar {
    pattern: Regex::new(concat!(
        r"\A</?(?P<name>[A-Za-z][\w:.-]*)",
        r#"|(?P<string>"[^"]*"|'[^']*')"#,
        r"|(?P<attr>[A-Za-z_:@][\w:.-]*)",
    ))
    .unwrap(),
    classes: &[
        ("name", "hljs-name"),
        ("string", "hljs-string"),
        ("attr", "hljs-attr"),
    ],
});

/// Highlight `code` with a single-level grammar.
fn tokenize(grammar: &Grammar, code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut last = 0;

    for caps in grammar.pattern.captures_iter(code) {
        let Some((class, m)) = grammar
            .classes
            .iter()
            .find_map(|(group, class)| caps.name(group).map(|m| (*class, m)))
        else {
            continue;
        };
        out.push_str(&escape_html(&code[last..m.start()]));
        write!(
            out,
            r#"<span class="{class}">{}</span>"#,
            escape_html(m.as_str())
        )
        .unwrap();
        last = m.end();
    }

    out.push_str(&escape_html(&code[last..]));
    out
}

/// Highlight HTML/XML: comments and doctypes as whole tokens, tags with their
/// name, attributes and quoted values. Text content stays plain.
fn highlight_markup(code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut last = 0;

    for caps in MARKUP.captures_iter(code) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        out.push_str(&escape_html(&code[last..m.start()]));
        if caps.name("comment").is_some() {
            write!(
                out,
                r#"<span class="hljs-comment">{}</span>"#,
                escape_html(m.as_str())
            )
            .unwrap();
        } else if caps.name("meta").is_some() {
            write!(
                out,
                r#"<span class="hljs-meta">{}</span>"#,
                escape_html(m.as_str())
            )
            .unwrap();
        } else {
            write!(
                out,
                r#"<span class="hljs-tag">{}</span>"#,
                tokenize(&TAG, m.as_str())
            )
            .unwrap();
        }
        last = m.end();
    }

    out.push_str(&escape_html(&code[last..]));
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn auto(code: &str, lang: Option<&str>) -> Highlighted {
        AutoHighlighter::new().highlight(code, lang).unwrap()
    }

    #[test]
    fn test_from_hint() {
        assert_eq!(Language::from_hint("SCSS"), Some(Language::Css));
        assert_eq!(Language::from_hint("html"), Some(Language::Markup));
        assert_eq!(Language::from_hint("json"), Some(Language::JavaScript));
        assert_eq!(Language::from_hint("bash"), Some(Language::Shell));
        assert_eq!(Language::from_hint("cobol"), None);
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            Language::detect("<button class=\"btn\">Go</button>"),
            Some(Language::Markup)
        );
        assert_eq!(
            Language::detect(".btn {\n  color: red;\n}"),
            Some(Language::Css)
        );
        assert_eq!(Language::detect("$primary: #333;"), Some(Language::Css));
        assert_eq!(
            Language::detect("const el = document.querySelector('.btn');"),
            Some(Language::JavaScript)
        );
        assert_eq!(Language::detect("$ npm install"), Some(Language::Shell));
        assert_eq!(Language::detect("just some words"), None);
    }

    #[test]
    fn test_css_tokens() {
        let result = auto(".btn { color: #fff; margin: -4px; }", Some("css"));
        assert_eq!(result.language.as_deref(), Some("css"));
        assert_eq!(
            result.html,
            concat!(
                r#"<span class="hljs-selector-class">.btn</span> { "#,
                r#"<span class="hljs-attribute">color</span>: <span class="hljs-number">#fff</span>; "#,
                r#"<span class="hljs-attribute">margin</span>: <span class="hljs-number">-4px</span>; }"#,
            )
        );
    }

    #[test]
    fn test_css_comment_and_at_rule() {
        let result = auto("/* x */\n@media screen {}", Some("scss"));
        assert!(result.html.contains(r#"<span class="hljs-comment">/* x */</span>"#));
        assert!(result.html.contains(r#"<span class="hljs-keyword">@media</span>"#));
        assert_eq!(result.language.as_deref(), Some("scss"));
    }

    #[test]
    fn test_css_identifier_digits_not_numbers() {
        let result = auto("h1 { }", Some("css"));
        assert_eq!(result.html, "h1 { }");
    }

    #[test]
    fn test_markup_tokens() {
        let result = auto(r#"<a href="/x">Don't</a>"#, Some("html"));
        assert_eq!(
            result.html,
            concat!(
                r#"<span class="hljs-tag">&lt;<span class="hljs-name">a</span> "#,
                r#"<span class="hljs-attr">href</span>=<span class="hljs-string">&quot;/x&quot;</span>&gt;</span>"#,
                r#"Don&#x27;t"#,
                r#"<span class="hljs-tag">&lt;/<span class="hljs-name">a</span>&gt;</span>"#,
            )
        );
    }

    #[test]
    fn test_javascript_keywords_and_literals() {
        let result = auto("const variable = true;", Some("js"));
        assert_eq!(
            result.html,
            r#"<span class="hljs-keyword">const</span> variable = <span class="hljs-literal">true</span>;"#
        );
    }

    #[test]
    fn test_shell_variables() {
        let result = auto("echo $HOME # home", Some("sh"));
        assert!(result.html.contains(r#"<span class="hljs-variable">$HOME</span>"#));
        assert!(result.html.contains(r#"<span class="hljs-comment"># home</span>"#));
    }

    #[test]
    fn test_unknown_language_is_escaped_plain_text() {
        let result = auto("a < b && c", Some("cobol"));
        assert_eq!(result.language.as_deref(), Some("cobol"));
        assert_eq!(result.html, "a &lt; b &amp;&amp; c");
    }

    #[test]
    fn test_unknown_hint_skips_detection() {
        let result = auto(".btn { color: red; }", Some("cobol"));
        assert_eq!(result.language.as_deref(), Some("cobol"));
        assert_eq!(result.html, ".btn { color: red; }");
    }

    #[test]
    fn test_detected_language_is_reported() {
        let result = auto("<p>hi</p>", None);
        assert_eq!(result.language.as_deref(), Some("html"));
    }

    #[test]
    fn test_undetectable_has_no_language() {
        let result = auto("plain words", None);
        assert_eq!(result.language, None);
        assert_eq!(result.html, "plain words");
    }

    #[test]
    fn test_too_large_block_errors() {
        let highlighter = AutoHighlighter::new().with_max_bytes(4);
        let err = highlighter.highlight(".abcdef {}", None).unwrap_err();
        assert!(matches!(err, HighlightError::TooLarge { len: 10, limit: 4 }));
    }

    #[test]
    fn test_plain_highlighter_escapes() {
        let result = PlainHighlighter.highlight("<b>", Some("html")).unwrap();
        assert_eq!(result.html, "&lt;b&gt;");
        assert_eq!(result.language.as_deref(), Some("html"));
    }
}
