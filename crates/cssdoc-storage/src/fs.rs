//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading stylesheet sources from a directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{ScanOrder, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Walks a source directory recursively and returns every regular file, skipping
/// hidden entries. An optional extension filter restricts the scan to stylesheet
/// sources.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use cssdoc_storage::{FsStorage, ScanOrder, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("styles"))
///     .with_extensions(vec!["css".to_owned(), "scss".to_owned()])
///     .with_order(ScanOrder::Ascending);
/// let files = storage.scan()?;
/// # Ok::<(), cssdoc_storage::StorageError>(())
/// ```
#[derive(Debug)]
pub struct FsStorage {
    /// Root directory for stylesheet sources.
    source_dir: PathBuf,
    /// Lowercase extensions to keep. Empty keeps every file.
    extensions: Vec<String>,
    /// Processing order of scanned files.
    order: ScanOrder,
}

impl FsStorage {
    /// Create a filesystem storage accepting every file under `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            source_dir,
            extensions: Vec::new(),
            order: ScanOrder::default(),
        }
    }

    /// Restrict the scan to files with one of the given extensions (without dot).
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Set the processing order of scanned files.
    #[must_use]
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Collect files below `dir` as paths relative to the source root.
    fn scan_directory(
        &self,
        dir: &Path,
        prefix: &Path,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir)
            .map_err(|e| StorageError::io(e, dir).with_backend(BACKEND))?;

        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(e, dir).with_backend(BACKEND))?;
            let name = entry.file_name();
            // Skip hidden files/dirs
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let relative = prefix.join(&name);
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                self.scan_directory(&entry.path(), &relative, files)?;
            } else if self.accepts(&relative) {
                files.push(relative);
            }
        }
        Ok(())
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.source_dir.is_dir() {
            return Err(StorageError::not_found(&self.source_dir).with_backend(BACKEND));
        }

        let mut files = Vec::new();
        self.scan_directory(&self.source_dir, Path::new(""), &mut files)?;
        files.sort();
        self.order.apply(&mut files);

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            file_count = files.len(),
            "Source scan completed"
        );

        Ok(files
            .into_iter()
            .map(|relative| self.source_dir.join(relative))
            .collect())
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path).map_err(|e| StorageError::io(e, path).with_backend(BACKEND))
    }
}
