//! Pipeline driver: files in, document model and stylesheet residue out.

use std::path::PathBuf;

use cssdoc_renderer::ContentTransformer;
use cssdoc_storage::{Storage, StorageError};

use crate::comment::split;
use crate::document::DocumentSet;
use crate::front_matter::parse;
use crate::residue::StylesheetResidue;

/// Fatal pipeline error.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Listing or reading a source file failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Everything one run produces.
#[derive(Debug, Default)]
pub struct SiteModel {
    pub documents: DocumentSet,
    pub residue: StylesheetResidue,
    /// Number of source files read.
    pub files: usize,
    /// Comments dropped for lacking a usable header.
    pub skipped: usize,
}

/// Runs split, parse, transform and aggregate over every source file.
///
/// Each run builds a fresh [`SiteModel`]; nothing is shared between runs.
pub struct Pipeline<'a> {
    storage: &'a dyn Storage,
    transformer: ContentTransformer,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(storage: &'a dyn Storage, transformer: ContentTransformer) -> Self {
        Self {
            storage,
            transformer,
        }
    }

    /// Scan storage and process every file in the order it is listed.
    ///
    /// # Errors
    ///
    /// Returns an error if scanning or reading any file fails.
    pub fn run(&self) -> Result<SiteModel, PipelineError> {
        let paths = self.storage.scan()?;
        self.run_paths(&paths)
    }

    /// Process `paths` in the given order. The order is not changed.
    ///
    /// # Errors
    ///
    /// Returns an error on the first file that cannot be read.
    pub fn run_paths(&self, paths: &[PathBuf]) -> Result<SiteModel, PipelineError> {
        let mut model = SiteModel::default();

        for path in paths {
            tracing::info!(path = %path.display(), "Reading file");
            let text = self.storage.read(path)?;
            model.files += 1;
            self.process_text(&text, &mut model);
        }

        tracing::info!(
            files = model.files,
            documents = model.documents.len(),
            sections = model.documents.section_count(),
            skipped = model.skipped,
            "Documentation collected"
        );

        Ok(model)
    }

    /// Process one file's text into `model`.
    pub fn process_text(&self, text: &str, model: &mut SiteModel) {
        let source = split(text);
        model.residue.add(source.residue);

        for raw in &source.comments {
            let outcome = parse(raw);
            if let Some(e) = &outcome.error {
                tracing::warn!(error = %e, "Ignoring front matter");
            }
            let comment = outcome.comment;

            let key = match comment.metadata.key() {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping documentation comment");
                    model.skipped += 1;
                    continue;
                }
            };

            let section_id = key.section_id();
            let rendered = self.transformer.transform_section(&comment.body, &section_id);
            for warning in &rendered.warnings {
                tracing::warn!(section = %section_id, warning = %warning, "Rendering problem");
            }

            let section = model
                .documents
                .attach(&key, comment.metadata.resume.clone(), rendered.html);
            tracing::debug!(section = %section.id, "Section added");
        }
    }
}
