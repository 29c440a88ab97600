//! Source file access for cssdoc.
//!
//! This crate provides a [`Storage`] trait for abstracting how stylesheet sources are
//! enumerated and read. This enables:
//!
//! - **Unit testing** of the documentation pipeline without touching the filesystem
//! - **Deterministic ordering**, since file order decides which summary wins when
//!   several comments share a document title
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()` and `read()` methods
//! - [`FsStorage`] implementation walking a source directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use cssdoc_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("styles"));
//! for path in storage.scan()? {
//!     let text = storage.read(&path)?;
//!     println!("{}: {} bytes", path.display(), text.len());
//! }
//! # Ok::<(), cssdoc_storage::StorageError>(())
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{ScanOrder, Storage, StorageError, StorageErrorKind};
