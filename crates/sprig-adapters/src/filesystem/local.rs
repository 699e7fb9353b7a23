//! Local filesystem adapter using std::fs.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use sprig_core::application::{ApplicationError, PathKind, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn probe(&self, path: &Path) -> Result<PathKind, ApplicationError> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(PathKind::Directory),
            Ok(_) => Ok(PathKind::File),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
            Err(e) => Err(map_io_error(path, e, "inspect", PathKind::Missing)),
        }
    }

    fn create_dir(&self, path: &Path) -> Result<(), ApplicationError> {
        trace!(path = %path.display(), "create_dir");
        fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory", PathKind::Directory))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        // `file` is dropped (and closed) on every return path below
        let mut file =
            File::create(path).map_err(|e| map_io_error(path, e, "create file", PathKind::File))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| map_io_error(path, e, "write file", PathKind::File))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str, expected: PathKind) -> ApplicationError {
    match e.kind() {
        io::ErrorKind::PermissionDenied => ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        },
        io::ErrorKind::AlreadyExists | io::ErrorKind::IsADirectory => {
            let found = if path.is_dir() {
                PathKind::Directory
            } else {
                PathKind::File
            };
            ApplicationError::PathConflict {
                path: path.to_path_buf(),
                expected,
                found,
            }
        }
        _ => ApplicationError::IoFailure {
            path: path.to_path_buf(),
            reason: format!("Failed to {}: {}", operation, e),
        },
    }
}
