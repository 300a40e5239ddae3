//! platscan entry point.

mod app;
mod cli;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load `.env` first so RUST_LOG and flag fallbacks can come from it.
    let dotenv = dotenvy::dotenv();

    // Initialize structured logging. Stdout is reserved for per-game lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting platscan");

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }

    let cli = cli::Cli::parse();
    let config = config::Config::resolve(cli)?;
    tracing::info!(
        platform = %config.platform,
        max_in_flight = config.max_in_flight.map(std::num::NonZeroUsize::get),
        output_dir = %config.output_dir.display(),
        "configuration loaded"
    );

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(app::run(config))?;

    tracing::info!(
        owned = report.observed,
        supported = report.partition.supported().len(),
        unsupported = report.partition.unsupported().len(),
        failed = report.failed,
        "scan complete"
    );
    Ok(())
}
