//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprig",
    bin_name = "sprig",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Start a Python project from a working baseline",
    long_about = "Sprig lays out a conventional Python source tree: package and \
                  test directories, packaging metadata, a license stub, README, \
                  .gitignore and tox configuration.",
    after_help = "EXAMPLES:\n\
        \x20 sprig init\n\
        \x20 sprig init --folder demo --name acme\n\
        \x20 sprig init -f demo --dry-run\n\
        \x20 sprig completions bash > /usr/share/bash-completion/completions/sprig",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise an empty Python project.
    #[command(
        about = "Initialise an empty Python project",
        after_help = "EXAMPLES:\n\
            \x20 sprig init                      # current directory, prompts for a name\n\
            \x20 sprig init -f demo -n acme      # ./demo, package src/acme\n\
            \x20 sprig init -f demo --dry-run    # show what would be written"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprig completions bash > ~/.local/share/bash-completion/completions/sprig\n\
            \x20 sprig completions zsh  > ~/.zfunc/_sprig\n\
            \x20 sprig completions fish > ~/.config/fish/completions/sprig.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprig configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprig config show\n\
            \x20 sprig config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprig init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Folder to initialise the project in.
    #[arg(
        short = 'f',
        long = "folder",
        value_name = "PATH",
        help = "Folder to initialize project in [default: .]"
    )]
    pub folder: Option<PathBuf>,

    /// Project name; prompted for when omitted.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Project name (prompted for when omitted)"
    )]
    pub name: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprig completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprig config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
