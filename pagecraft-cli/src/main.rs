//! # Pagecraft
//!
//! Replays a gesture script and exports the resulting page.

use clap::Parser;
use pagecraft_cli::{CliArgs, HostConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing with optional JSON format.
///
/// Logs go to stderr so `--output -` keeps stdout clean.
/// Set `RUST_LOG` to control log levels (default: info,pagecraft_core=debug,pagecraft_export=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pagecraft_core=debug,pagecraft_export=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = HostConfig::from(args);
    tracing::debug!(?config, "Starting Pagecraft");

    let summary = pagecraft_cli::run(&config)?;
    tracing::info!(
        applied = summary.applied,
        refused = summary.refused,
        "Pagecraft finished"
    );
    Ok(())
}
