//! Path planner: turns a target directory and project name into a plan.
//!
//! Planning is pure. Whether the target already exists is probed once by
//! the caller and passed in as a [`RootState`].

use tracing::debug;

use crate::domain::{
    entities::ScaffoldPlan,
    templates::{INIT_MARKER, TemplateName, TemplateSet},
    value_objects::{ProjectName, TargetDirectory},
};

/// Whether the target directory existed before planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootState {
    Absent,
    Present,
}

/// Computes the standard project layout.
#[derive(Debug, Clone, Copy)]
pub struct PathPlanner {
    templates: &'static TemplateSet,
}

impl PathPlanner {
    pub fn new(templates: &'static TemplateSet) -> Self {
        Self { templates }
    }

    /// Build the plan for `project` inside `target`.
    ///
    /// Directories always precede the files they contain. The target itself
    /// is only planned when it is absent.
    pub fn plan(
        &self,
        target: &TargetDirectory,
        project: &ProjectName,
        root: RootState,
    ) -> ScaffoldPlan {
        let src = target.join("src");
        let tests = target.join("tests");
        let package = src.join(project.as_str());

        let mut plan = ScaffoldPlan::new(target.as_path());

        if root == RootState::Absent {
            plan.add_directory(target.as_path());
        }
        plan.add_directory(&src);
        plan.add_directory(&tests);
        plan.add_directory(&package);

        plan.add_file(package.join(INIT_MARKER), "");
        plan.add_file(tests.join(INIT_MARKER), "");
        plan.add_file(target.join("LICENSE.txt"), "");

        let literal = |name: TemplateName| (target.join(name.file_name()), self.templates.get(name));

        let (path, content) = literal(TemplateName::Gitignore);
        plan.add_file(path, content);
        plan.add_file(target.join("README.md"), self.templates.readme(project));
        let (path, content) = literal(TemplateName::Pyproject);
        plan.add_file(path, content);
        let (path, content) = literal(TemplateName::SetupMetadata);
        plan.add_file(path, content);
        plan.add_file(
            target.join("setup.py"),
            self.templates.package_descriptor(project),
        );
        let (path, content) = literal(TemplateName::TestRunnerConfig);
        plan.add_file(path, content);

        debug!(entries = plan.entry_count(), root = %target, "Plan built");
        plan
    }
}

impl Default for PathPlanner {
    fn default() -> Self {
        Self::new(TemplateSet::builtin())
    }
}
