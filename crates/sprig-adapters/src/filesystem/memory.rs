//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sprig_core::application::{ApplicationError, PathKind, ports::Filesystem};

/// In-memory filesystem for testing.
///
/// Filesystem roots (paths without a parent) always exist. Failures can be
/// injected per path to exercise error propagation.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
    broken: HashMap<PathBuf, String>,
    operations: Vec<PathBuf>,
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            None => true,
            Some(parent) => parent.parent().is_none() || self.directories.contains(parent),
        }
    }

    fn kind(&self, path: &Path) -> PathKind {
        if path.parent().is_none() || self.directories.contains(path) {
            PathKind::Directory
        } else if self.files.contains_key(path) {
            PathKind::File
        } else {
            PathKind::Missing
        }
    }

    fn check_injected(&self, path: &Path) -> Result<(), ApplicationError> {
        if self.denied.contains(path) {
            return Err(ApplicationError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        if let Some(reason) = self.broken.get(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                reason: reason.clone(),
            });
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory and all of its ancestors.
    pub fn add_dir_all(&self, path: impl AsRef<Path>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file (its parent is created as well).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir_all(parent);
        }
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Make every mutation at `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().denied.insert(path.into());
    }

    /// Make every mutation at `path` fail with `IoFailure`.
    pub fn break_path(&self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .broken
            .insert(path.into(), reason.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check whether a directory exists.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().kind(path) == PathKind::Directory
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Paths successfully mutated, in order.
    pub fn operations(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().operations.clone()
    }
}

fn lock_error(path: &Path) -> ApplicationError {
    ApplicationError::IoFailure {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn probe(&self, path: &Path) -> Result<PathKind, ApplicationError> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        Ok(inner.kind(path))
    }

    fn create_dir(&self, path: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.check_injected(path)?;

        match inner.kind(path) {
            PathKind::Missing => {}
            found => {
                return Err(ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                    expected: PathKind::Directory,
                    found,
                });
            }
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            });
        }

        inner.directories.insert(path.to_path_buf());
        inner.operations.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.check_injected(path)?;

        if inner.kind(path) == PathKind::Directory {
            return Err(ApplicationError::PathConflict {
                path: path.to_path_buf(),
                expected: PathKind::File,
                found: PathKind::Directory,
            });
        }
        if !inner.parent_exists(path) {
            return Err(ApplicationError::IoFailure {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            });
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.operations.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from(if cfg!(windows) { r"C:\m" } else { "/m" })
    }

    #[test]
    fn directories_need_parents() {
        let fs = MemoryFilesystem::new();
        let nested = root().join("a").join("b");
        assert!(matches!(
            fs.create_dir(&nested),
            Err(ApplicationError::IoFailure { .. })
        ));
        fs.create_dir(&root()).unwrap();
        fs.create_dir(&root().join("a")).unwrap();
        fs.create_dir(&nested).unwrap();
        assert!(fs.is_dir(&nested));
    }

    #[test]
    fn create_dir_over_existing_entry_conflicts() {
        let fs = MemoryFilesystem::new();
        fs.add_file(root().join("x"), "");
        let err = fs.create_dir(&root().join("x")).unwrap_err();
        assert!(matches!(err, ApplicationError::PathConflict { found: PathKind::File, .. }));
    }

    #[test]
    fn injected_failures_surface() {
        let fs = MemoryFilesystem::new();
        fs.add_dir_all(root());
        fs.deny(root().join("locked"));
        fs.break_path(root().join("full"), "No space left on device");

        assert!(matches!(
            fs.write_file(&root().join("locked"), ""),
            Err(ApplicationError::PermissionDenied { .. })
        ));
        assert!(matches!(
            fs.write_file(&root().join("full"), ""),
            Err(ApplicationError::IoFailure { .. })
        ));
        assert!(fs.operations().is_empty());
    }

    #[test]
    fn write_then_read_back() {
        let fs = MemoryFilesystem::new();
        fs.add_dir_all(root());
        fs.write_file(&root().join("README.md"), "# x\n").unwrap();
        assert_eq!(fs.read_file(&root().join("README.md")).as_deref(), Some("# x\n"));
        assert_eq!(fs.probe(&root().join("README.md")).unwrap(), PathKind::File);
    }

    #[test]
    fn list_files_skips_directories() {
        let fs = MemoryFilesystem::new();
        fs.add_dir_all(root().join("src"));
        fs.add_file(root().join("README.md"), "");
        fs.add_file(root().join("src").join("lib.py"), "");

        let mut files = fs.list_files();
        files.sort();
        assert_eq!(files, vec![root().join("README.md"), root().join("src").join("lib.py")]);
    }
}
