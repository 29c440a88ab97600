//! `cssdoc build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use cssdoc_config::{CliSettings, Config};
use cssdoc_core::Pipeline;
use cssdoc_renderer::{AutoHighlighter, ContentTransformer};
use cssdoc_site::{SiteOptions, StaticSiteBuilder};
use cssdoc_storage::FsStorage;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover cssdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet source directory (overrides config).
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory for the generated styleguide (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Page title (overrides config).
    #[arg(long, env = "CSSDOC_TITLE")]
    title: Option<String>,

    /// URL prefix for asset links (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Highlight theme name (overrides config).
    #[arg(long)]
    highlight_theme: Option<String>,

    /// Enable verbose output (per-file progress logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a source file cannot be read,
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            title: self.title,
            base: self.base,
            highlight_theme: self.highlight_theme,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = &config.source_resolved;
        output.field("Source", source.input_dir.display());
        output.field("Output", config.output_dir.display());

        let storage = FsStorage::new(source.input_dir.clone())
            .with_extensions(source.extensions.clone())
            .with_order(source.order);
        let transformer = ContentTransformer::new(Arc::new(AutoHighlighter::new()));
        let model = Pipeline::new(&storage, transformer).run()?;

        if model.documents.is_empty() {
            output.warning("No documentation comments found");
        }

        let builder = StaticSiteBuilder::new(SiteOptions::from_config(&config));
        let index = builder.build(&model, &config.output_dir)?;
        tracing::info!(index = %index.display(), "Done");

        output.success(&format!("Done! Page created in {}", index.display()));
        Ok(())
    }
}
