//! Logging setup for the barrelgen binary.
//!
//! Verbosity flags translate into one `EnvFilter` directive per workspace
//! crate, so `-vv` raises core and adapter diagnostics together with the
//! binary's own. `RUST_LOG` overrides the flags entirely. Events go to
//! stderr; stdout is reserved for generated-file listings (`--dry-run`
//! output stays pipeable).

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates covered by the verbosity flags, in filter-directive form.
const CRATES: [&str; 3] = ["barrelgen", "barrelgen_core", "barrelgen_adapters"];

/// Install the global tracing subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `--quiet` beats `-v`; the counter saturates at TRACE.
fn level_for(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
