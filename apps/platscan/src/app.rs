//! Run orchestrator: fetch the library, probe every game, write the lists.

use anyhow::Context;
use platscan_probe::{CollectReport, Collector, ProbeOutcome, StoreProber};
use platscan_steam_api::{AppId, Client};

use crate::config::Config;
use crate::output::{self, OutputPaths};

/// Runs one scan to completion.
///
/// Any error returned here is fatal. Per-game lookup failures are not
/// errors; they only show up in the report counts.
pub async fn run(config: Config) -> anyhow::Result<CollectReport> {
    let client = Client::with_config(config.client.clone())
        .context("failed to build HTTP client")?;

    // -- Owned games --
    let games = client
        .owned_games(&config.api_key, &config.steam_id)
        .await
        .context("failed to fetch owned games")?;
    tracing::info!(count = games.len(), "owned games fetched");

    let app_ids: Vec<AppId> = games.iter().map(|g| g.appid).collect();

    // -- Probes --
    let prober = StoreProber::new(client, config.platform);
    let collector = Collector::new(prober)
        .with_max_in_flight(config.max_in_flight)
        .on_outcome(Box::new(print_outcome));

    let report = collector.collect(&app_ids).await;

    // -- Output --
    let paths = OutputPaths::for_platform(&config.output_dir, config.platform);
    output::write_partition(&paths, &report.partition)?;

    Ok(report)
}

/// Prints one line per resolved game. Failures stay silent.
fn print_outcome(_app_id: AppId, outcome: &ProbeOutcome) {
    if let ProbeOutcome::Resolved(result) = outcome {
        let mark = if result.supported { "✅" } else { "❌" };
        println!("{mark} {}", result.label);
    }
}
