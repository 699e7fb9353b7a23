//! Domain value objects: ProjectName, TargetDirectory.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Both
//! are constructed once per invocation and never mutated afterwards.
//! Neither touches the filesystem: resolving a target directory only joins
//! it onto the working directory, and `..` is left for the OS to resolve.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// The name of the project being scaffolded.
///
/// The name becomes the package directory under `src/` and is interpolated
/// into `README.md` and `setup.py`. Only names that would break the layout
/// are rejected; packaging-name rules are not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse and validate a user-supplied name.
    ///
    /// Surrounding whitespace is trimmed. Rejects the empty name, `.`/`..`,
    /// and anything containing a path separator.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        let name = raw.trim();

        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name == "." || name == ".." {
            Some("name cannot be a relative directory reference")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name: raw.to_string(),
                reason: reason.into(),
            }),
            None => Ok(Self(name.to_string())),
        }
    }

    /// Wrap a name without validating it.
    pub fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── TargetDirectory ──────────────────────────────────────────────────────────

/// Absolute path of the directory the project is generated into.
///
/// Invariant: always absolute and free of `.` components. `..` is kept, so
/// `link/../demo` lands beside the symlink's target, not beside `link`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TargetDirectory(PathBuf);

impl TargetDirectory {
    /// Resolve `path` against `cwd`, dropping `.` components.
    ///
    /// `cwd` is expected to be absolute.
    pub fn resolve(path: impl AsRef<Path>, cwd: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.as_ref().join(path)
        };
        Self(normalize(&joined))
    }

    /// Wrap an already-absolute path.
    ///
    /// # Panics
    /// Panics if `path` is relative (use [`Self::resolve`] instead).
    pub fn from_absolute(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(
            path.is_absolute(),
            "TargetDirectory must be absolute: {:?}",
            path
        );
        Self(normalize(&path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Join a relative segment onto the target.
    pub fn join(&self, segment: impl AsRef<Path>) -> PathBuf {
        self.0.join(segment)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for TargetDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
