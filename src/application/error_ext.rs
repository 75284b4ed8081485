//! Error conversion helpers for knowledge base I/O
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Tag an I/O error as a failed knowledge base read of `path`.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path).on_read(&path)?;
    /// ```
    fn on_read(self, path: &Path) -> ApplicationResult<T>;

    /// Tag an I/O error as a failed knowledge base write of `path`.
    fn on_write(self, path: &Path) -> ApplicationResult<T>;

    /// Tag an I/O error as a failed read of the player's answer.
    fn on_input(self) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn on_read(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::DatabaseRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn on_write(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::DatabaseWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn on_input(self) -> ApplicationResult<T> {
        self.map_err(ApplicationError::Input)
    }
}
