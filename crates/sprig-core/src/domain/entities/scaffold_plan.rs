use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Ordered list of filesystem artifacts to create for one invocation.
///
/// This is the output of the path planner and the sole input of the
/// materializer. It contains no behaviour beyond checking its own
/// invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldPlan {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<ScaffoldEntry>,
}

impl ScaffoldPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries.push(ScaffoldEntry::File(FileToWrite {
            path: path.into(),
            content: content.into(),
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries
            .push(ScaffoldEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Check the plan's structural invariants.
    ///
    /// Every path must be unique and inside the root, and every entry's
    /// parent must be either a directory planned earlier or the root itself
    /// when the root is not part of the plan (it already exists).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen = HashSet::new();
        let mut known_dirs: HashSet<&Path> = HashSet::new();
        if !self.creates_root() {
            known_dirs.insert(self.root.as_path());
        }

        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_path_buf(),
                });
            }

            if !path.starts_with(&self.root) {
                return Err(DomainError::OutsideRoot {
                    path: path.to_path_buf(),
                    root: self.root.clone(),
                });
            }

            let is_root = path == self.root.as_path();
            if !is_root {
                let parent_known = path.parent().is_some_and(|p| known_dirs.contains(p));
                if !parent_known {
                    return Err(DomainError::OrderingViolation {
                        path: path.to_path_buf(),
                    });
                }
            }

            if entry.is_directory() {
                known_dirs.insert(path);
            }
        }

        Ok(())
    }

    /// `true` if the plan's first job is creating the root itself.
    pub fn creates_root(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.is_directory() && e.path() == self.root.as_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[ScaffoldEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            ScaffoldEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            ScaffoldEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Look up a planned file by its path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScaffoldEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl ScaffoldEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
