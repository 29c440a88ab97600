//! Shared utility functions for markdown rendering.

use pulldown_cmark::HeadingLevel;

/// Convert text to a lowercase, anchor-safe slug.
///
/// Letters, digits and underscores are kept (lowercased). Every other run of
/// characters, whitespace and hyphens included, collapses into a single `-`.
/// Leading and trailing separators are dropped.
///
/// # Examples
///
/// ```
/// use cssdoc_renderer::slugify;
///
/// assert_eq!(slugify("Buttons"), "buttons");
/// assert_eq!(slugify("Buttons_Primary"), "buttons_primary");
/// assert_eq!(slugify("Forms & Inputs"), "forms-inputs");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !result.is_empty() {
                result.push('-');
            }
            pending_dash = false;
            result.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    result
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Multiple   Spaces -- and dashes"), "multiple-spaces-and-dashes");
        assert_eq!(slugify("What's New?"), "what-s-new");
    }

    #[test]
    fn test_slugify_trims_separators() {
        assert_eq!(slugify("  --Spaces--  "), "spaces");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_keeps_underscores() {
        assert_eq!(slugify("Buttons_Secondary"), "buttons_secondary");
        assert_eq!(slugify("Forms_Text Input"), "forms_text-input");
    }

    #[test]
    fn test_slugify_unicode_letters() {
        assert_eq!(slugify("Ümlaut Übung"), "ümlaut-übung");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        assert_eq!(slugify("Grid: 12 columns"), slugify("Grid: 12 columns"));
    }

    #[test]
    fn test_heading_level_to_num() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }
}
