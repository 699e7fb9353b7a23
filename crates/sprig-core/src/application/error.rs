//! Application layer errors.
//!
//! These errors represent failures while materializing a plan, not planning
//! logic. Planning errors are `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::error::ErrorCategory;

/// What occupies (or should occupy) a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Missing,
    Directory,
    File,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "nothing",
            Self::Directory => "a directory",
            Self::File => "a file",
        })
    }
}

/// Errors that occur while touching the filesystem.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A planned path is occupied by the wrong kind of entry.
    #[error("Path conflict at {path}: expected {expected}, found {found}")]
    PathConflict {
        path: PathBuf,
        expected: PathKind,
        found: PathKind,
    },

    /// The process may not create or write at this path.
    #[error("Permission denied at {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure (disk full, name too long, ...).
    #[error("I/O failure at {path}: {reason}")]
    IoFailure { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// The path the failure happened at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PathConflict { path, .. }
            | Self::PermissionDenied { path }
            | Self::IoFailure { path, .. } => path,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathConflict {
                path,
                expected,
                found,
            } => vec![
                format!("{} is {} but {} is needed", path.display(), found, expected),
                "Move or remove the conflicting entry and run again".into(),
                "Or choose a different folder with --folder".into(),
            ],
            Self::PermissionDenied { path } => vec![
                format!("Cannot write to: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::IoFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check available disk space and path length".into(),
                "Files written before the failure were left in place".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathConflict { .. } => ErrorCategory::Conflict,
            Self::PermissionDenied { .. } => ErrorCategory::Permission,
            Self::IoFailure { .. } => ErrorCategory::Io,
        }
    }
}
