//! Unified error handling for Sprig Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprig Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SprigError {
    /// Errors from the domain layer (invalid names, broken plans).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SprigError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Permission,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type SprigResult<T> = Result<T, SprigError>;
