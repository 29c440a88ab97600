//! CLI error types.

use cssdoc_config::ConfigError;
use cssdoc_core::PipelineError;
use cssdoc_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
