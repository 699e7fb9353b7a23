//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire `init` workflow:
//! 1. Probe the target directory once
//! 2. Plan the layout
//! 3. Materialize the plan
//!
//! Resolving the target path and obtaining the project name happen in the
//! caller; the service receives both as finished values.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        error::PathKind,
        ports::Filesystem,
        services::materializer::{AppliedEntry, EntryOutcome, Materializer},
    },
    domain::{
        DomainValidator as validator, PathPlanner, ProjectName, RootState, ScaffoldPlan,
        TargetDirectory,
    },
    error::SprigResult,
};

/// Stages of a single `init` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    DirectoryResolved,
    PlanBuilt,
    Materializing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::DirectoryResolved => "directory-resolved",
            Self::PlanBuilt => "plan-built",
            Self::Materializing => "materializing",
            Self::Done => "done",
        })
    }
}

/// Summary of a completed scaffold, suitable for display or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project: ProjectName,
    pub target: TargetDirectory,
    pub root_created: bool,
    pub entries: Vec<AppliedEntry>,
}

impl ScaffoldReport {
    pub fn count(&self, outcome: EntryOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    planner: PathPlanner,
}

impl ScaffoldService {
    /// Create a new scaffold service over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sprig_core::application::ScaffoldService;
    /// # fn demo(filesystem: Box<dyn sprig_core::application::ports::Filesystem>) {
    /// let service = ScaffoldService::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self::with_planner(filesystem, PathPlanner::default())
    }

    pub fn with_planner(filesystem: Box<dyn Filesystem>, planner: PathPlanner) -> Self {
        Self {
            filesystem,
            planner,
        }
    }

    /// Probe the target and compute the plan without writing anything.
    ///
    /// Fails with `PathConflict` if the target exists but is not a directory.
    #[instrument(skip_all, fields(target = %target, project = %project))]
    pub fn plan(&self, target: &TargetDirectory, project: &ProjectName) -> SprigResult<ScaffoldPlan> {
        let root = match self.filesystem.probe(target.as_path())? {
            PathKind::Missing => RootState::Absent,
            PathKind::Directory => RootState::Present,
            found @ PathKind::File => {
                return Err(ApplicationError::PathConflict {
                    path: target.as_path().to_path_buf(),
                    expected: PathKind::Directory,
                    found,
                }
                .into());
            }
        };
        debug!(stage = %Stage::DirectoryResolved, ?root);

        let plan = self.planner.plan(target, project, root);
        validator::validate_plan(&plan)?;
        debug!(stage = %Stage::PlanBuilt, entries = plan.entry_count());

        Ok(plan)
    }

    /// Scaffold a new project into `target`.
    ///
    /// Entries written before a failure are left in place.
    #[instrument(skip_all, fields(target = %target, project = %project))]
    pub fn init(
        &self,
        target: &TargetDirectory,
        project: &ProjectName,
    ) -> SprigResult<ScaffoldReport> {
        debug!(stage = %Stage::Start);
        let plan = self.plan(target, project)?;

        debug!(stage = %Stage::Materializing);
        let applied = Materializer::new(&*self.filesystem).materialize(&plan)?;

        info!(
            stage = %Stage::Done,
            created = applied.count(EntryOutcome::Created),
            written = applied.count(EntryOutcome::Written),
            overwritten = applied.count(EntryOutcome::Overwritten),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldReport {
            project: project.clone(),
            target: target.clone(),
            root_created: plan.creates_root(),
            entries: applied.entries,
        })
    }
}
