//! Error handling for the Sprig CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use sprig_core::error::SprigError;

pub use sprig_core::error::ErrorCategory as CoreCategory;

const VERBOSE_HINT: &str = "Use -v / --verbose for more details.";

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `sprig-core`.
    #[error(transparent)]
    Core(#[from] SprigError),

    /// The project name could not be collected from the user.
    #[error("Could not read the project name: {message}")]
    Prompt { message: String },

    /// Feature not compiled into this build.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the scaffold itself failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering failed.
    #[error("Failed to render JSON output")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),

            Self::Prompt { .. } => vec![
                "Pass the name directly: sprig init --name <NAME>".into(),
                "Or pipe it on stdin: echo acme | sprig init".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                "Pass the name directly: sprig init --name <NAME>".into(),
                format!("Or reinstall with it enabled: cargo install sprig-cli --features {feature}"),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Run 'sprig config path' to see where the config file lives".into(),
                "Run 'sprig config show' to inspect the effective settings".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],

            Self::Serialization(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Permission | CoreCategory::Io | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
            Self::Prompt { .. } => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a terminal: red headline, dimmed cause chain, yellow
    /// suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!(
            "\n{} {}\n\n  {}\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );
        if verbose {
            for cause in self.causes() {
                out += &format!("  {} {}\n", "\u{2192}".dimmed(), cause.dimmed());
            }
        }
        self.push_suggestions(&mut out, &"Suggestions:".yellow().bold().to_string());
        if !verbose {
            out += &format!("\n{}\n", VERBOSE_HINT.dimmed());
        }
        out
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");
        if verbose {
            for cause in self.causes() {
                out += &format!("  Caused by: {cause}\n");
            }
        }
        self.push_suggestions(&mut out, "Suggestions:");
        if !verbose {
            out += &format!("\n{VERBOSE_HINT}\n");
        }
        out
    }

    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(err) = next {
            causes.push(err.to_string());
            next = err.source();
        }
        causes
    }

    fn push_suggestions(&self, out: &mut String, heading: &str) {
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return;
        }
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        for s in suggestions {
            out.push_str(&format!("  {s}\n"));
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (invalid name, occupied path).
    UserError,
    /// Configuration or build-feature error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
