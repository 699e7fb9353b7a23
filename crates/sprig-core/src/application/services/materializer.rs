//! Materializer - executes a scaffold plan against a filesystem port.
//!
//! Entries are applied strictly in plan order. The first failure halts the
//! run; entries already applied stay on disk.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    application::{
        error::{ApplicationError, PathKind},
        ports::Filesystem,
    },
    domain::{ScaffoldEntry, ScaffoldPlan},
};

/// What happened to a single plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryOutcome {
    /// Directory did not exist and was created.
    Created,
    /// Directory was already there; nothing to do.
    AlreadyExisted,
    /// File did not exist and was written.
    Written,
    /// File existed and was truncated and rewritten.
    Overwritten,
}

/// Outcome of one materialized entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedEntry {
    pub path: PathBuf,
    pub outcome: EntryOutcome,
}

/// Ordered record of a successful materialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub entries: Vec<AppliedEntry>,
}

impl MaterializeReport {
    pub fn count(&self, outcome: EntryOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Applies plans through a [`Filesystem`].
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Apply every entry of `plan` in order.
    #[instrument(skip_all, fields(root = %plan.root().display(), entries = plan.entry_count()))]
    pub fn materialize(&self, plan: &ScaffoldPlan) -> Result<MaterializeReport, ApplicationError> {
        let mut report = MaterializeReport::default();

        for entry in plan.entries() {
            let applied = match entry {
                ScaffoldEntry::Directory(dir) if dir.path == plan.root() => {
                    // the façade already established that the root is absent
                    self.filesystem.create_dir(&dir.path).map(|()| EntryOutcome::Created)
                }
                ScaffoldEntry::Directory(dir) => self.ensure_directory(&dir.path),
                ScaffoldEntry::File(file) => self.write_file(&file.path, &file.content),
            };

            match applied {
                Ok(outcome) => {
                    debug!(path = %entry.path().display(), ?outcome, "Entry applied");
                    report.entries.push(AppliedEntry {
                        path: entry.path().to_path_buf(),
                        outcome,
                    });
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        applied = report.entries.len(),
                        remaining = plan.entry_count() - report.entries.len(),
                        "Materialization halted"
                    );
                    return Err(e);
                }
            }
        }

        Ok(report)
    }

    fn ensure_directory(&self, path: &std::path::Path) -> Result<EntryOutcome, ApplicationError> {
        match self.filesystem.probe(path)? {
            PathKind::Directory => Ok(EntryOutcome::AlreadyExisted),
            PathKind::Missing => {
                self.filesystem.create_dir(path)?;
                Ok(EntryOutcome::Created)
            }
            found @ PathKind::File => Err(ApplicationError::PathConflict {
                path: path.to_path_buf(),
                expected: PathKind::Directory,
                found,
            }),
        }
    }

    fn write_file(
        &self,
        path: &std::path::Path,
        content: &str,
    ) -> Result<EntryOutcome, ApplicationError> {
        let outcome = match self.filesystem.probe(path)? {
            PathKind::Missing => EntryOutcome::Written,
            PathKind::File => EntryOutcome::Overwritten,
            found @ PathKind::Directory => {
                return Err(ApplicationError::PathConflict {
                    path: path.to_path_buf(),
                    expected: PathKind::File,
                    found,
                });
            }
        };
        self.filesystem.write_file(path, content)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::ports::output::MockFilesystem;

    fn root() -> PathBuf {
        PathBuf::from(if cfg!(windows) { r"C:\p" } else { "/p" })
    }

    fn small_plan() -> ScaffoldPlan {
        let r = root();
        ScaffoldPlan::new(&r)
            .with_directory(&r)
            .with_directory(r.join("src"))
            .with_file(r.join("src").join("a.txt"), "a")
            .with_file(r.join("b.txt"), "b")
    }

    #[test]
    fn applies_entries_in_plan_order() {
        let r = root();
        let mut fs = MockFilesystem::new();
        let mut seq = Sequence::new();

        fs.expect_create_dir()
            .with(eq(r.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_probe()
            .with(eq(r.join("src")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(PathKind::Missing));
        fs.expect_create_dir()
            .with(eq(r.join("src")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_probe()
            .with(eq(r.join("src").join("a.txt")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(PathKind::Missing));
        fs.expect_write_file()
            .withf(|p: &Path, c: &str| p.ends_with("a.txt") && c == "a")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_probe()
            .with(eq(r.join("b.txt")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(PathKind::File));
        fs.expect_write_file()
            .withf(|p: &Path, c: &str| p.ends_with("b.txt") && c == "b")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let report = Materializer::new(&fs).materialize(&small_plan()).unwrap();

        let outcomes: Vec<_> = report.entries.iter().map(|e| e.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                EntryOutcome::Created,
                EntryOutcome::Created,
                EntryOutcome::Written,
                EntryOutcome::Overwritten,
            ]
        );
    }

    #[test]
    fn halts_on_first_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().times(1).returning(|_| Ok(()));
        fs.expect_probe()
            .times(1)
            .returning(|p| {
                Err(ApplicationError::PermissionDenied {
                    path: p.to_path_buf(),
                })
            });
        // nothing after the failing entry may be attempted
        fs.expect_write_file().times(0);

        let err = Materializer::new(&fs).materialize(&small_plan()).unwrap_err();
        assert!(matches!(err, ApplicationError::PermissionDenied { .. }));
        assert!(err.path().ends_with("src"));
    }

    #[test]
    fn file_in_place_of_directory_is_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir().times(1).returning(|_| Ok(()));
        fs.expect_probe().returning(|_| Ok(PathKind::File));
        fs.expect_write_file().times(0);

        let err = Materializer::new(&fs).materialize(&small_plan()).unwrap_err();
        assert_eq!(
            err,
            ApplicationError::PathConflict {
                path: root().join("src"),
                expected: PathKind::Directory,
                found: PathKind::File,
            }
        );
    }

    #[test]
    fn directory_in_place_of_file_is_a_conflict() {
        let r = root();
        let plan = ScaffoldPlan::new(&r).with_file(r.join("setup.py"), "x");
        let mut fs = MockFilesystem::new();
        fs.expect_probe().returning(|_| Ok(PathKind::Directory));
        fs.expect_write_file().times(0);

        let err = Materializer::new(&fs).materialize(&plan).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::PathConflict {
                expected: PathKind::File,
                found: PathKind::Directory,
                ..
            }
        ));
    }

    #[test]
    fn existing_directories_are_reused() {
        let r = root();
        let plan = ScaffoldPlan::new(&r).with_directory(r.join("src"));
        let mut fs = MockFilesystem::new();
        fs.expect_probe().returning(|_| Ok(PathKind::Directory));
        fs.expect_create_dir().times(0);

        let report = Materializer::new(&fs).materialize(&plan).unwrap();
        assert_eq!(report.count(EntryOutcome::AlreadyExisted), 1);
    }
}
