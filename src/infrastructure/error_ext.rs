//! Error conversion helpers for store I/O
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{StoreError, StoreResult};

/// Extension trait for converting `io::Result` to `StoreResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.fs.read_to_string(&self.path)
    ///     .with_path_context("read groups", &self.path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> StoreResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> StoreResult<T> {
        self.map_err(|e| StoreError::Io {
            context: format!("{}: {}", action, path.display()),
            source: e,
        })
    }
}

/// Same as [`IoResultExt`] for JSON (de)serialization results.
pub trait JsonResultExt<T> {
    fn with_path_context(self, action: &str, path: &Path) -> StoreResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> StoreResult<T> {
        self.map_err(|e| StoreError::Format {
            context: format!("{}: {}", action, path.display()),
            source: e,
        })
    }
}
