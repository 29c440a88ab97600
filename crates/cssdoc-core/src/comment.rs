//! Documentation comment splitting.
//!
//! A documentation comment is a block comment whose opener is immediately
//! followed by `---`:
//!
//! ```css
//! /*---
//! title: Buttons
//! section: Primary
//! ---
//! Markdown body.
//! */
//! .btn { }
//! ```
//!
//! Block comments do not nest in CSS, so the first `*/` after an opener always
//! closes the block. A `*/` inside the body (e.g. in a code sample) ends the
//! comment early.

use std::sync::LazyLock;

use regex::Regex;

/// Opener through the first closer, shortest match.
static DOC_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*---[\s\S]*?\*/").unwrap());

const OPEN: &str = "/*";
const CLOSE: &str = "*/";

/// Source text split into stylesheet residue and documentation comments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitSource {
    /// Input with every documentation comment removed.
    pub residue: String,
    /// Comment texts in source order, with `/*` and `*/` stripped.
    ///
    /// Each entry still starts with the `---` marker.
    pub comments: Vec<String>,
}

/// Split `text` into residue and documentation comments.
///
/// Every byte of `text` ends up in exactly one of the two outputs apart from the
/// two comment markers of each block.
#[must_use]
pub fn split(text: &str) -> SplitSource {
    let mut residue = String::with_capacity(text.len());
    let mut comments = Vec::new();
    let mut last = 0;

    for m in DOC_COMMENT.find_iter(text) {
        residue.push_str(&text[last..m.start()]);
        let block = m.as_str();
        comments.push(block[OPEN.len()..block.len() - CLOSE.len()].to_owned());
        last = m.end();
    }
    residue.push_str(&text[last..]);

    SplitSource { residue, comments }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_no_comments() {
        let text = ".a { color: red; }\n/* regular comment */\n";
        let split = split(text);
        assert_eq!(split.residue, text);
        assert!(split.comments.is_empty());
    }

    #[test]
    fn test_split_single_comment() {
        let text = "/*---\ntitle: A\n---\nBody\n*/\n.a {}";
        let split = split(text);
        assert_eq!(split.residue, "\n.a {}");
        assert_eq!(split.comments, vec!["---\ntitle: A\n---\nBody\n".to_owned()]);
    }

    #[test]
    fn test_split_preserves_order() {
        let text = "/*---A*/x/*---B*/y/*---C*/";
        let split = split(text);
        assert_eq!(split.comments, vec!["---A", "---B", "---C"]);
        assert_eq!(split.residue, "xy");
    }

    #[test]
    fn test_split_empty_comment() {
        let split = split("a/*---*/b");
        assert_eq!(split.comments, vec!["---"]);
        assert_eq!(split.residue, "ab");
    }

    #[test]
    fn test_split_first_closer_wins() {
        let split = split("/*--- one */ two */");
        assert_eq!(split.comments, vec!["--- one "]);
        assert_eq!(split.residue, " two */");
    }

    #[test]
    fn test_split_ignores_plain_block_comments() {
        let split = split("/* -- not docs */");
        assert!(split.comments.is_empty());
    }

    #[test]
    fn test_split_unterminated_comment_stays_in_residue() {
        let text = ".a {}\n/*--- dangling";
        let split = split(text);
        assert!(split.comments.is_empty());
        assert_eq!(split.residue, text);
    }

    #[test]
    fn test_split_reconstructs_input() {
        let inputs = [
            "",
            "plain",
            "/*---x*/",
            "a\r\n/*---\r\ntitle: T\r\n---\r\n*/\r\nb /*---y*/ c",
            "/*---a*//*---b*/ /* c */ /*---d*/tail",
            "ünïcödé /*--- ✓ */ ✗",
        ];
        for input in inputs {
            let split = split(input);
            let comment_bytes: usize = split.comments.iter().map(|c| c.len() + 4).sum();
            assert_eq!(split.residue.len() + comment_bytes, input.len(), "{input:?}");

            // Re-insert each comment at the first position where the remaining
            // input diverges from the remaining residue.
            let mut rebuilt = String::new();
            let mut residue = split.residue.as_str();
            let mut rest = input;
            for comment in &split.comments {
                let marker = format!("/*{comment}*/");
                let at = rest.find(&marker).unwrap();
                rebuilt.push_str(&residue[..at]);
                rebuilt.push_str(&marker);
                residue = &residue[at..];
                rest = &rest[at + marker.len()..];
            }
            rebuilt.push_str(residue);
            assert_eq!(rebuilt, input);
        }
    }
}
