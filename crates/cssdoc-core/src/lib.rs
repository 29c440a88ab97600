//! Documentation comment extraction and document assembly.
//!
//! Stylesheets carry documentation in `/*--- ... */` comments with a YAML
//! header naming a document (`title`) and a section (`section`). This crate
//! turns a set of source files into:
//!
//! - a [`DocumentSet`]: documents in first-seen order, each with its sections in
//!   processing order
//! - a [`StylesheetResidue`]: the sources with documentation removed, to be
//!   concatenated into the site stylesheet
//!
//! The stages are usable on their own: [`split`] separates comments from
//! residue, [`parse`] reads the header, and [`DocumentSet::add_section`] groups
//! rendered comments. [`Pipeline`] drives them over a [`Storage`] backend.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cssdoc_core::{Pipeline, SiteModel};
//! use cssdoc_renderer::{AutoHighlighter, ContentTransformer};
//! use cssdoc_storage::FsStorage;
//!
//! let transformer = ContentTransformer::new(Arc::new(AutoHighlighter::new()));
//! let storage = FsStorage::new("styles".into());
//! let pipeline = Pipeline::new(&storage, transformer);
//!
//! let mut model = SiteModel::default();
//! pipeline.process_text("/*---\ntitle: Buttons\nsection: Primary\n---\nHi\n*/", &mut model);
//! assert_eq!(model.documents.documents()[0].sections[0].id, "buttons_primary");
//! ```
//!
//! [`Storage`]: cssdoc_storage::Storage

mod comment;
mod document;
mod front_matter;
mod pipeline;
mod residue;

pub use comment::{SplitSource, split};
pub use document::{Document, DocumentSet, Section, document_id, section_id};
pub use front_matter::{
    CommentMetadata, FrontMatterError, MissingField, ParseOutcome, ParsedComment, SectionKey,
    parse,
};
pub use pipeline::{Pipeline, PipelineError, SiteModel};
pub use residue::StylesheetResidue;
