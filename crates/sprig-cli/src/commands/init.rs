//! `sprig init`: lay out a Python project in a folder.
//!
//! This module owns the parts of the workflow that touch the user: resolving
//! `--folder`, collecting the project name, and rendering the result. Planning
//! and writing are delegated to [`ScaffoldService`].

use std::io::{self, BufRead, IsTerminal as _, Write as _};
use std::path::Path;

use tracing::{debug, instrument};

use sprig_adapters::LocalFilesystem;
use sprig_core::{
    application::{EntryOutcome, ScaffoldReport, ScaffoldService},
    domain::{ProjectName, ScaffoldEntry, ScaffoldPlan, TargetDirectory},
    error::SprigError,
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

const PROMPT: &str = "Project name";

/// Execute the `init` command.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: InitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;
    let folder = args
        .folder
        .unwrap_or_else(|| config.defaults.folder.clone());
    let target = TargetDirectory::resolve(&folder, &cwd);
    debug!(%target, "Resolved target directory");

    let raw_name = match args.name {
        Some(name) => name,
        None => prompt_project_name()?,
    };
    let project = ProjectName::parse(&raw_name).map_err(SprigError::from)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let plan = service.plan(&target, &project)?;
        return render_plan(&plan, &project, output);
    }

    let report = service.init(&target, &project)?;
    render_report(&report, output)
}

// ── project name ──────────────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_project_name() -> CliResult<String> {
    if io::stdin().is_terminal() {
        return dialoguer::Input::<String>::new()
            .with_prompt(PROMPT)
            .interact_text()
            .map_err(|e| CliError::Prompt {
                message: e.to_string(),
            });
    }
    read_piped_name(io::stdin().lock())
}

#[cfg(not(feature = "interactive"))]
fn prompt_project_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Read one line from a non-interactive stdin.
#[cfg_attr(not(feature = "interactive"), allow(dead_code))]
fn read_piped_name(mut input: impl BufRead) -> CliResult<String> {
    eprint!("{PROMPT}: ");
    io::stderr().flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_cli_context(|| "Failed to read the project name from stdin")?;
    if read == 0 {
        return Err(CliError::Prompt {
            message: "stdin closed before a name was entered".into(),
        });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

// ── rendering ─────────────────────────────────────────────────────────────────

fn render_plan(plan: &ScaffoldPlan, project: &ProjectName, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.header(&format!(
        "Would initialise '{project}' in {}",
        plan.root().display()
    ))?;
    for entry in plan.entries() {
        let rel = relative(entry.path(), plan.root());
        let line = match entry {
            ScaffoldEntry::Directory(_) => format!("  dir   {rel}/"),
            ScaffoldEntry::File(file) => format!("  file  {rel} ({} bytes)", file.size()),
        };
        output.print(&line)?;
    }
    output.info("Dry run: nothing was written")?;
    Ok(())
}

fn render_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    output.header(&format!(
        "Initialising '{}' in {}",
        report.project, report.target
    ))?;
    for entry in &report.entries {
        output.print(&format!(
            "  {:<10}{}",
            outcome_label(entry.outcome),
            relative(&entry.path, report.target.as_path())
        ))?;
    }

    let overwritten = report.count(EntryOutcome::Overwritten);
    if overwritten > 0 {
        output.warning(&format!("{overwritten} existing file(s) were overwritten"))?;
    }
    output.success(&format!("Project '{}' is ready", report.project))?;
    Ok(())
}

fn outcome_label(outcome: EntryOutcome) -> &'static str {
    match outcome {
        EntryOutcome::Created => "created",
        EntryOutcome::AlreadyExisted => "exists",
        EntryOutcome::Written => "wrote",
        EntryOutcome::Overwritten => "overwrote",
    }
}

/// Display `path` relative to `root`, with the root itself shown as `.`.
fn relative(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_owned(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
