//! Static styleguide generation.
//!
//! [`StaticSiteBuilder`] turns a [`SiteModel`](cssdoc_core::SiteModel) into a
//! self-contained directory with one HTML page. The page template, stylesheet,
//! navigation script, logo and highlight themes are bundled; each can be
//! replaced through [`AssetsConfig`](cssdoc_config::AssetsConfig).

pub mod assets;
mod builder;

pub use builder::{BuildError, SiteOptions, StaticSiteBuilder};
