//! Fenced code block helpers.

/// Extract the language hint from a fence info string.
///
/// Format: `language [anything else]`. Only the first word is meaningful;
/// an empty info string yields `None`.
#[must_use]
pub(crate) fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(|lang| lang.trim_matches(|c| c == '{' || c == '}' || c == '.'))
        .filter(|lang| !lang.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_language_only() {
        assert_eq!(fence_language("scss"), Some("scss".to_owned()));
    }

    #[test]
    fn test_fence_language_ignores_trailing_words() {
        assert_eq!(fence_language("HTML title='Card'"), Some("html".to_owned()));
    }

    #[test]
    fn test_fence_language_pandoc_style() {
        assert_eq!(fence_language("{.css}"), Some("css".to_owned()));
    }

    #[test]
    fn test_fence_language_empty() {
        assert_eq!(fence_language(""), None);
        assert_eq!(fence_language("   "), None);
    }
}
