//! Roast Curve Analyzer - batch CLI
//!
//! Ingests one or more CSV roast logs, derives their three-phase profiles,
//! and prints a JSON report with percentage-based timeline layout for each
//! accepted file.

use std::path::PathBuf;

use serde::Serialize;
use shared::analysis::{project_timeline, TimelineProjection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roast_curve_analyzer::config::Config;
use roast_curve_analyzer::services::analysis::BatchReport;
use roast_curve_analyzer::services::{AnalysisService, ProfileStore};

/// Report printed on stdout
#[derive(Serialize)]
struct ReportOutput {
    #[serde(flatten)]
    report: BatchReport,
    /// Axis layout per accepted profile, in the same order
    timelines: Vec<TimelineProjection>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roast_analyzer=info,roast_curve_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting roast curve analyzer");
    tracing::info!("Environment: {}", config.environment);

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("Usage: roast-analyzer <log.csv>...");
        std::process::exit(2);
    }

    let service = AnalysisService::new(config.engine_settings());
    let report = service.analyze_files(paths, config.ingest.clone()).await;

    // The store mirrors what a UI session would hold; profiles land in
    // submission order and stay keyed by file name for later removal.
    let store = ProfileStore::new();
    store.append(report.profiles.clone());

    let timelines = store
        .snapshot()
        .iter()
        .map(|profile| project_timeline(profile, config.timeline.max_total_seconds))
        .collect();

    let output = ReportOutput { report, timelines };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
