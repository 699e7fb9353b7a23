//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// An explicit `--output-format` wins over `output.format` from config;
    /// `auto` becomes `human` on a TTY and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            config.output.format
        } else {
            args.output_format
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(text)
    }

    fn marked(&self, mark: char, msg: &str, paint: fn(&str) -> String) -> io::Result<()> {
        if self.no_color {
            self.line(&format!("{mark} {msg}"))
        } else {
            self.line(&paint(&format!("{mark} {msg}")))
        }
    }

    /// Unstyled line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.line(msg)
    }

    /// `✓ msg` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', msg, |s| s.green().bold().to_string())
    }

    /// `⚠ msg` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{26a0}', msg, |s| s.yellow().to_string())
    }

    /// `ℹ msg` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', msg, |s| s.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.line(text)
        } else {
            self.line(&text.cyan().bold().to_string())
        }
    }

    /// Pretty JSON on stdout, printed even under `--quiet`.
    pub fn json<T: Serialize>(&self, value: &T) -> Result<(), serde_json::Error> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered).map_err(serde_json::Error::io)
    }

    /// `true` when machine-readable output was requested.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}
