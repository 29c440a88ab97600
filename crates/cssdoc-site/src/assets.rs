//! Bundled page template and highlight themes, compiled into the binary.

use std::borrow::Cow;

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Page template source.
pub const TEMPLATE: &str = "template/index.html";
/// Page stylesheet.
pub const STYLESHEET: &str = "template/style.css";
/// Navigation script.
pub const SCRIPT: &str = "template/script.js";
/// Default logo.
pub const LOGO: &str = "template/logo.svg";

const THEME_DIR: &str = "themes/";

/// Get a bundled asset by path (relative to `assets/`).
#[must_use]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get a bundled text asset. Invalid UTF-8 reads as missing.
#[must_use]
pub fn text(path: &str) -> Option<String> {
    get(path).and_then(|data| String::from_utf8(data.into_owned()).ok())
}

/// Names of the bundled highlight themes, sorted.
#[must_use]
pub fn themes() -> Vec<String> {
    let mut names: Vec<String> = Assets::iter()
        .filter_map(|path| {
            path.strip_prefix(THEME_DIR)
                .and_then(|file| file.strip_suffix(".css"))
                .map(str::to_owned)
        })
        .collect();
    names.sort();
    names
}

/// Stylesheet of the highlight theme `name`, if bundled.
#[must_use]
pub fn theme_css(name: &str) -> Option<String> {
    if name.contains('/') {
        return None;
    }
    text(&format!("{THEME_DIR}{name}.css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_assets_are_bundled() {
        for path in [TEMPLATE, STYLESHEET, SCRIPT, LOGO] {
            assert!(get(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_themes() {
        let names = themes();
        assert!(names.contains(&"github".to_owned()));
        assert!(names.contains(&"monokai".to_owned()));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_theme_css() {
        assert!(theme_css("github").unwrap().contains(".hljs"));
        assert!(theme_css("solarized").is_none());
        assert!(theme_css("../template/style").is_none());
    }
}
