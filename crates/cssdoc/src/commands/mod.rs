//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod themes;

pub(crate) use build::BuildArgs;
