//! Driven (output) ports - implemented by infrastructure.
//!
//! The `sprig-adapters` crate provides implementations.

use std::path::Path;

use crate::application::error::{ApplicationError, PathKind};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprig_adapters::LocalFilesystem` (production)
/// - `sprig_adapters::MemoryFilesystem` (testing)
///
/// ## Contract
///
/// - Paths are absolute; callers guarantee parents exist.
/// - `create_dir` creates exactly one level and fails if anything already
///   occupies the path.
/// - `write_file` creates or truncates, and the handle is closed on every
///   exit path including a failed write.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// What currently occupies `path`.
    fn probe(&self, path: &Path) -> Result<PathKind, ApplicationError>;

    /// Create a single directory.
    fn create_dir(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Create or overwrite a file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError>;
}
