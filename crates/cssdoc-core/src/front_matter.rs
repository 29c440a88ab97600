//! Front matter parsing for documentation comments.
//!
//! A comment starts with a YAML header framed by `---` lines:
//!
//! ```text
//! ---
//! title: Buttons
//! section: Primary
//! resume: Clickable things.
//! ---
//! Markdown body
//! ```
//!
//! The header may also be closed with `...`. Parsing never fails outright: a
//! comment without a usable header yields empty metadata and the full text as
//! body, alongside a [`FrontMatterError`] describing the problem.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::document::{document_id, section_id};

/// Header framed by delimiter lines at the very start of the comment.
static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\A\x{FEFF}?---[ \t]*\r?\n([\s\S]*?)^(?:---|\.\.\.)[ \t]*(?:\r?\n|\z)")
        .unwrap()
});

/// Error describing why a comment header could not be used.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// Comment does not start with a `---` line.
    #[error("comment has no front matter")]
    Missing,
    /// Opening `---` without a closing delimiter line.
    #[error("front matter is not terminated by a `---` line")]
    Unterminated,
    /// Header is not a valid YAML mapping.
    #[error("invalid front matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Metadata declared in a comment header.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CommentMetadata {
    /// Document the comment belongs to.
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: Option<String>,
    /// Section title within the document.
    #[serde(default, deserialize_with = "scalar_string")]
    pub section: Option<String>,
    /// Short document summary.
    #[serde(default, alias = "summary", deserialize_with = "scalar_string")]
    pub resume: Option<String>,
    /// Any other keys. Kept for inspection, not used for grouping.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Required header field that was absent or blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MissingField {
    #[error("missing `title` in front matter")]
    Title,
    #[error("missing `section` in front matter")]
    Section,
}

/// Grouping key of a comment: its document title and section title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionKey<'a> {
    pub title: &'a str,
    pub section: &'a str,
}

impl SectionKey<'_> {
    /// Anchor id of the owning document.
    #[must_use]
    pub fn document_id(&self) -> String {
        document_id(self.title)
    }

    /// Anchor id of the section, namespaced by the document title.
    #[must_use]
    pub fn section_id(&self) -> String {
        section_id(self.title, self.section)
    }
}

impl CommentMetadata {
    /// Parse a YAML header. Blank input gives empty metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or not a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }

    /// Grouping key, if both `title` and `section` are present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, checking `title` before `section`.
    pub fn key(&self) -> Result<SectionKey<'_>, MissingField> {
        let title = non_blank(self.title.as_deref()).ok_or(MissingField::Title)?;
        let section = non_blank(self.section.as_deref()).ok_or(MissingField::Section)?;
        Ok(SectionKey { title, section })
    }

    /// Check if no field was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.section.is_none() && self.resume.is_none() && self.extra.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept strings, numbers and booleans; `null` reads as absent.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected a string, number or boolean")),
    }
}

/// A comment split into header metadata and Markdown body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedComment {
    pub metadata: CommentMetadata,
    /// Text after the header, untouched.
    pub body: String,
}

/// Result of [`parse`]: always a usable comment, plus the reason if the header
/// was discarded.
#[derive(Debug)]
pub struct ParseOutcome {
    pub comment: ParsedComment,
    pub error: Option<FrontMatterError>,
}

/// Split a raw comment into metadata and body.
///
/// On any header problem the metadata is empty and the body is the whole input.
#[must_use]
pub fn parse(raw: &str) -> ParseOutcome {
    match parse_strict(raw) {
        Ok(comment) => ParseOutcome {
            comment,
            error: None,
        },
        Err(e) => ParseOutcome {
            comment: ParsedComment {
                metadata: CommentMetadata::default(),
                body: raw.to_owned(),
            },
            error: Some(e),
        },
    }
}

fn parse_strict(raw: &str) -> Result<ParsedComment, FrontMatterError> {
    let Some(caps) = FRONT_MATTER.captures(raw) else {
        return Err(if raw.trim_start_matches('\u{feff}').starts_with("---") {
            FrontMatterError::Unterminated
        } else {
            FrontMatterError::Missing
        });
    };

    let header_end = caps.get(0).map_or(0, |m| m.end());
    let metadata = CommentMetadata::from_yaml(caps.get(1).map_or("", |m| m.as_str()))?;

    Ok(ParsedComment {
        metadata,
        body: raw[header_end..].to_owned(),
    })
}
