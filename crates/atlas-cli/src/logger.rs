//! Logging setup for the atlas CLI, built on the `tracing` ecosystem.
//!
//! Verbosity is resolved in this order: `--verbose` (debug for atlas crates),
//! `--quiet` (errors only), the `RUST_LOG` environment variable, then an info
//! default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("atlas_graph=debug,atlas_parse=debug,atlas_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("atlas_graph=info,atlas_parse=info,atlas_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
