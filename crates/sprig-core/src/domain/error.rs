// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and wrappers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown template '{name}'")]
    UnknownTemplate { name: String },

    // ========================================================================
    // Plan Invariant Violations
    // ========================================================================
    #[error("Scaffold plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: PathBuf },

    #[error("Planned path {path} lies outside the project root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("{path} is planned before its parent directory exists")]
    OrderingViolation { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use a plain package name without path separators".into(),
                "Examples: widget, acme_tools, mypkg".into(),
            ],
            Self::UnknownTemplate { name } => vec![
                format!("'{}' is not a known template", name),
                "Known templates: gitignore, pyproject, setup-metadata, test-runner-config".into(),
            ],
            _ => vec![
                "The generated plan is inconsistent".into(),
                "This is a bug in sprig, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnknownTemplate { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyPlan
            | Self::DuplicatePath { .. }
            | Self::OutsideRoot { .. }
            | Self::OrderingViolation { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
