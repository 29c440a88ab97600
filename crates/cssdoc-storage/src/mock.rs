//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Files are scanned in the exact order they were added, which makes
/// order-sensitive pipeline behavior easy to pin down.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use cssdoc_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("b.css", ".b {}")
///     .with_file("a.css", ".a {}");
///
/// let files = storage.scan().unwrap();
/// assert_eq!(files[0], Path::new("b.css"));
/// assert_eq!(storage.read(Path::new("a.css")).unwrap(), ".a {}");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: Vec<(PathBuf, Option<String>)>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), Some(content.into())));
        self
    }

    /// Add a file that is listed by `scan()` but fails to read.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push((path.into(), None));
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<PathBuf>, StorageError> {
        Ok(self.files.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        match self.files.iter().find(|(p, _)| p == path) {
            Some((_, Some(content))) => Ok(content.clone()),
            Some((_, None)) => Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND)),
            None => Err(StorageError::not_found(path).with_backend(BACKEND)),
        }
    }
}
