//! Configuration management for cssdoc.
//!
//! Parses `cssdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base`
//! - `source.input_dir`
//! - `output.output_dir`

mod expand;

use std::path::{Path, PathBuf};

use cssdoc_storage::ScanOrder;
use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "cssdoc.toml";

/// Default site title.
pub const DEFAULT_TITLE: &str = "My Awesome Styleguide";

/// Default highlight theme.
pub const DEFAULT_HIGHLIGHT_THEME: &str = "github";

const DEFAULT_INPUT_DIR: &str = "styles";
const DEFAULT_OUTPUT_DIR: &str = "styleguide";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override source directory.
    pub input_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override site title.
    pub title: Option<String>,
    /// Override URL base path.
    pub base: Option<String>,
    /// Override highlight theme.
    pub highlight_theme: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation settings.
    pub site: SiteConfig,
    /// Source settings (paths are relative strings from TOML).
    source: SourceConfigRaw,
    /// Output settings (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Template asset overrides (paths are relative strings from TOML).
    assets: AssetsConfigRaw,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub output_dir: PathBuf,
    /// Resolved asset overrides (set after loading).
    #[serde(skip)]
    pub assets_resolved: AssetsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site presentation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page title.
    pub title: String,
    /// URL base path prefixed to asset links.
    pub base: String,
    /// Highlight theme stylesheet name.
    pub highlight_theme: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            base: String::new(),
            highlight_theme: DEFAULT_HIGHLIGHT_THEME.to_owned(),
        }
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    input_dir: Option<String>,
    extensions: Vec<String>,
    order: ScanOrder,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SourceConfig {
    /// Directory scanned for stylesheets.
    pub input_dir: PathBuf,
    /// Accepted file extensions. Empty means every file.
    pub extensions: Vec<String>,
    /// Processing order of scanned files.
    pub order: ScanOrder,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    output_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct AssetsConfigRaw {
    logo: Option<String>,
    favicon: Option<String>,
    css: Option<String>,
    js: Option<String>,
    template: Option<String>,
}

/// Resolved template asset overrides. `None` selects the bundled asset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    pub logo: Option<PathBuf>,
    /// Favicon; copied only when set.
    pub favicon: Option<PathBuf>,
    pub css: Option<PathBuf>,
    pub js: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`STYLEGUIDE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cssdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input_dir) = &settings.input_dir {
            self.source_resolved.input_dir.clone_from(input_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
        }
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
        if let Some(theme) = &settings.highlight_theme {
            self.site.highlight_theme.clone_from(theme);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            source: SourceConfigRaw::default(),
            output: OutputConfigRaw::default(),
            assets: AssetsConfigRaw::default(),
            source_resolved: SourceConfig {
                input_dir: base.join(DEFAULT_INPUT_DIR),
                extensions: Vec::new(),
                order: ScanOrder::default(),
            },
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            assets_resolved: AssetsConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.highlight_theme, "site.highlight_theme")?;
        if self.site.base.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "site.base cannot contain whitespace".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;

        if let Some(ref dir) = self.source.input_dir {
            self.source.input_dir = Some(expand::expand_env(dir, "source.input_dir")?);
        }
        if let Some(ref dir) = self.output.output_dir {
            self.output.output_dir = Some(expand::expand_env(dir, "output.output_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));
        let resolve_opt = |path: Option<&String>| path.map(|p| config_dir.join(p));

        self.source_resolved = SourceConfig {
            input_dir: resolve(self.source.input_dir.as_deref(), DEFAULT_INPUT_DIR),
            extensions: self
                .source
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            order: self.source.order,
        };
        self.output_dir = resolve(self.output.output_dir.as_deref(), DEFAULT_OUTPUT_DIR);
        self.assets_resolved = AssetsConfig {
            logo: resolve_opt(self.assets.logo.as_ref()),
            favicon: resolve_opt(self.assets.favicon.as_ref()),
            css: resolve_opt(self.assets.css.as_ref()),
            js: resolve_opt(self.assets.js.as_ref()),
            template: resolve_opt(self.assets.template.as_ref()),
        };
    }
}
