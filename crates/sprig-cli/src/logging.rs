//! Tracing subscriber setup.
//!
//! Only the binary installs a subscriber; `sprig-core` and `sprig-adapters`
//! just emit events. Diagnostics always go to stderr so that stdout stays
//! clean for `--output-format json`.
//!
//! `-q` maps to `error`, no flag to `warn`, and each `-v` steps through
//! `info`, `debug` and `trace`. `RUST_LOG`, when set, replaces all of that.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the CLI-selected level.
const CRATES: [&str; 3] = ["sprig", "sprig_core", "sprig_adapters"];

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(derive_level(args))));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_color && io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
