//! Static styleguide builder.
//!
//! Renders the document model into a single `index.html` plus its stylesheet,
//! script and images:
//!
//! ```text
//! <output>/index.html
//! <output>/css/style.css   residue, template stylesheet, highlight theme
//! <output>/js/script.js
//! <output>/img/logo.<ext>
//! <output>/favicon.ico     only when configured
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cssdoc_config::{AssetsConfig, Config, DEFAULT_HIGHLIGHT_THEME, DEFAULT_TITLE};
use cssdoc_core::{Document, SiteModel};
use serde::Serialize;

use crate::assets;

const INDEX_FILE: &str = "index.html";
const STYLE_FILE: &str = "css/style.css";
const SCRIPT_FILE: &str = "js/script.js";
const FAVICON_FILE: &str = "favicon.ico";
const DEFAULT_LOGO_EXT: &str = "svg";

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Creating or writing an output file failed.
    #[error("Failed to create the files at: {}\n\n{source}", dir.display())]
    Write {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading a configured asset override failed.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Template could not be compiled or rendered.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    /// Highlight theme is not bundled.
    #[error("Unknown highlight theme `{name}` (available: {available})")]
    UnknownTheme { name: String, available: String },
    /// Bundled asset is absent from the binary.
    #[error("Bundled asset missing: {0}")]
    MissingAsset(&'static str),
}

/// Page-level settings for one build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub title: String,
    /// Prefix for every asset link, e.g. `"/styleguide/"`.
    pub base: String,
    pub highlight_theme: String,
    pub assets: AssetsConfig,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            base: String::new(),
            highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_owned(),
            assets: AssetsConfig::default(),
        }
    }
}

impl SiteOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.site.title.clone(),
            base: config.site.base.clone(),
            highlight_theme: config.site.highlight_theme.clone(),
            assets: config.assets_resolved.clone(),
        }
    }
}

/// Template context for `index.html`.
#[derive(Serialize)]
struct PageContext<'a> {
    base: &'a str,
    title: &'a str,
    logo: &'a str,
    favicon: bool,
    items: &'a [Document],
}

/// Builds the styleguide page from a [`SiteModel`].
#[derive(Clone, Debug, Default)]
pub struct StaticSiteBuilder {
    options: SiteOptions,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(options: SiteOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Write the site into `output_dir` and return the path of `index.html`.
    ///
    /// The highlight theme and every override are read before anything is
    /// written, so a bad configuration leaves the output untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme is unknown, an override cannot be read,
    /// the template fails, or any output file cannot be written.
    pub fn build(&self, model: &SiteModel, output_dir: &Path) -> Result<PathBuf, BuildError> {
        let theme_css = self.theme_css()?;
        let overrides = &self.options.assets;
        let template = text_asset(overrides.template.as_deref(), assets::TEMPLATE)?;
        let template_css = text_asset(overrides.css.as_deref(), assets::STYLESHEET)?;
        let script = text_asset(overrides.js.as_deref(), assets::SCRIPT)?;
        let (logo_file, logo) = self.logo()?;
        let favicon = match &overrides.favicon {
            Some(path) => Some(read_bytes(path)?),
            None => None,
        };

        let page = self.render_page(
            &template,
            model.documents.documents(),
            &logo_file,
            favicon.is_some(),
        )?;

        let mut stylesheet = model.residue.join();
        stylesheet.push_str(&template_css);
        stylesheet.push_str(&theme_css);

        tracing::info!(output = %output_dir.display(), "Generating assets");

        let index = write_file(output_dir, INDEX_FILE, page.as_bytes())?;
        write_file(output_dir, STYLE_FILE, stylesheet.as_bytes())?;
        write_file(output_dir, SCRIPT_FILE, script.as_bytes())?;
        write_file(output_dir, &logo_file, &logo)?;
        if let Some(favicon) = favicon {
            write_file(output_dir, FAVICON_FILE, &favicon)?;
        }

        Ok(index)
    }

    /// Render the page template without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be compiled or rendered.
    pub fn render_page(
        &self,
        template: &str,
        documents: &[Document],
        logo: &str,
        favicon: bool,
    ) -> Result<String, BuildError> {
        let mut env = minijinja::Environment::new();
        env.add_template(INDEX_FILE, template)?;

        let ctx = minijinja::Value::from_serialize(PageContext {
            base: &self.options.base,
            title: &self.options.title,
            logo,
            favicon,
            items: documents,
        });
        Ok(env.get_template(INDEX_FILE)?.render(ctx)?)
    }

    fn theme_css(&self) -> Result<String, BuildError> {
        let name = &self.options.highlight_theme;
        assets::theme_css(name).ok_or_else(|| BuildError::UnknownTheme {
            name: name.clone(),
            available: assets::themes().join(", "),
        })
    }

    /// Output path and bytes of the logo.
    fn logo(&self) -> Result<(String, Vec<u8>), BuildError> {
        match &self.options.assets.logo {
            Some(path) => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or(DEFAULT_LOGO_EXT);
                Ok((format!("img/logo.{ext}"), read_bytes(path)?))
            }
            None => {
                let data =
                    assets::get(assets::LOGO).ok_or(BuildError::MissingAsset(assets::LOGO))?;
                Ok((format!("img/logo.{DEFAULT_LOGO_EXT}"), data.into_owned()))
            }
        }
    }
}

/// Configured override, or the bundled asset.
fn text_asset(path: Option<&Path>, bundled: &'static str) -> Result<String, BuildError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => assets::text(bundled).ok_or(BuildError::MissingAsset(bundled)),
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, BuildError> {
    fs::read(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `output_dir/relative`, creating parent directories.
fn write_file(output_dir: &Path, relative: &str, contents: &[u8]) -> Result<PathBuf, BuildError> {
    let path = output_dir.join(relative);
    let wrap = |source| BuildError::Write {
        dir: output_dir.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(&path, contents).map_err(wrap)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use cssdoc_core::Section;
    use pretty_assertions::assert_eq;

    use super::*;

    fn document() -> Document {
        Document {
            id: "buttons".to_owned(),
            title: "Buttons".to_owned(),
            resume: Some("Clickable <things>".to_owned()),
            sections: vec![Section {
                id: "buttons_primary".to_owned(),
                title: "Primary".to_owned(),
                content: "<p>Use <code>.btn</code></p>".to_owned(),
            }],
        }
    }

    #[test]
    fn test_render_page_escapes_text_but_not_content() {
        let builder = StaticSiteBuilder::default();
        let html = builder
            .render_page(
                "{% for item in items %}{{ item.resume }}|{{ item.sections[0].content|safe }}{% endfor %}",
                &[document()],
                "img/logo.svg",
                false,
            )
            .unwrap();
        assert_eq!(
            html,
            "Clickable &lt;things&gt;|<p>Use <code>.btn</code></p>"
        );
    }

    #[test]
    fn test_render_page_uses_base() {
        let builder = StaticSiteBuilder::new(SiteOptions {
            base: "/guide/".to_owned(),
            ..SiteOptions::default()
        });
        let html = builder
            .render_page("{{ base }}{{ logo }}", &[], "img/logo.png", false)
            .unwrap();
        assert_eq!(html, "/guide/img/logo.png");
    }

    #[test]
    fn test_bundled_template_renders() {
        let builder = StaticSiteBuilder::default();
        let template = assets::text(assets::TEMPLATE).unwrap();
        let html = builder
            .render_page(&template, &[document()], "img/logo.svg", false)
            .unwrap();
        assert!(html.contains("<title>My Awesome Styleguide</title>"));
        assert!(html.contains(r##"<a href="#buttons_primary">Primary</a>"##));
        assert!(html.contains(r#"<article class="cssdoc_doc cssdoc_section" id="buttons_primary">"#));
        assert!(html.contains("<p>Use <code>.btn</code></p>"));
        assert!(!html.contains("favicon.ico"));
    }

    #[test]
    fn test_template_syntax_error() {
        let builder = StaticSiteBuilder::default();
        let err = builder.render_page("{% for %}", &[], "", false).unwrap_err();
        assert!(matches!(err, BuildError::Template(_)));
    }

    #[test]
    fn test_unknown_theme() {
        let builder = StaticSiteBuilder::new(SiteOptions {
            highlight_theme: "solarized".to_owned(),
            ..SiteOptions::default()
        });
        let err = builder.theme_css().unwrap_err();
        let BuildError::UnknownTheme { name, available } = err else {
            panic!("expected UnknownTheme");
        };
        assert_eq!(name, "solarized");
        assert!(available.contains("github"));
    }

    #[test]
    fn test_write_error_message() {
        let err = BuildError::Write {
            dir: PathBuf::from("out"),
            source: io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "Failed to create the files at: out\n\ndisk full");
    }
}
