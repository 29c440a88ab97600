//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting source enumeration and reading,
//! along with [`StorageError`] for unified error handling across backends.

use std::path::{Path, PathBuf};

/// Order in which scanned source files are handed to the pipeline.
///
/// Paths are always sorted by their path relative to the source root first;
/// `Descending` then walks that list from the last entry to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScanOrder {
    /// Lexicographic order.
    Ascending,
    /// Reverse lexicographic order.
    #[default]
    Descending,
}

impl ScanOrder {
    /// Apply this order to an already sorted list of paths.
    pub fn apply(self, paths: &mut [PathBuf]) {
        if self == Self::Descending {
            paths.reverse();
        }
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Content is not valid UTF-8 text.
    InvalidData,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: &Path) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData => StorageErrorKind::InvalidData,
            _ => StorageErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }
        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidData => "Invalid data",
            StorageErrorKind::Other => "Error",
        };
        write!(f, "{kind_str}")?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Source enumeration and retrieval.
///
/// The order returned by [`scan`](Storage::scan) is the processing order: consumers
/// must not re-sort it.
pub trait Storage: Send + Sync {
    /// Enumerate every source file, in processing order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the source root is missing or cannot be listed.
    fn scan(&self) -> Result<Vec<PathBuf>, StorageError>;

    /// Read the full text of a source file returned by [`scan`](Storage::scan).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file doesn't exist or can't be read as UTF-8.
    fn read(&self, path: &Path) -> Result<String, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_order_default_is_descending() {
        assert_eq!(ScanOrder::default(), ScanOrder::Descending);
    }

    #[test]
    fn test_scan_order_apply() {
        let mut paths = vec![PathBuf::from("a.css"), PathBuf::from("b.css")];
        ScanOrder::Ascending.apply(&mut paths);
        assert_eq!(paths, vec![PathBuf::from("a.css"), PathBuf::from("b.css")]);

        ScanOrder::Descending.apply(&mut paths);
        assert_eq!(paths, vec![PathBuf::from("b.css"), PathBuf::from("a.css")]);
    }

    #[test]
    fn test_error_display_full() {
        let err = StorageError::not_found("styles/buttons.css").with_backend("Fs");
        assert_eq!(
            err.to_string(),
            "[Fs] Not found (path: styles/buttons.css)"
        );
    }

    #[test]
    fn test_error_from_io_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io(io, Path::new("locked.css"));
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert_eq!(err.path, Some(PathBuf::from("locked.css")));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("denied"));
    }
}
