use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lynx_charts::analytics::{ClicksPanel, DurationWindow, GeoPanel};
use lynx_charts::config::{Config, LoggingConfig};
use lynx_charts::source::{clicks_or_empty, visits_or_empty, AnalyticsSource, JsonFileSource};

#[derive(Parser)]
#[command(name = "lynx-charts")]
#[command(about = "Chart-ready link analytics", long_about = None)]
struct Cli {
    /// Directory holding analytics exports (overrides CHARTS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clicks over time, gap-filled for the window
    Clicks {
        /// Link key
        key: String,
        /// Window in days (1, 7, 30 or 365)
        #[arg(long)]
        days: Option<DurationWindow>,
    },
    /// Visits grouped by country
    Geo {
        /// Link key
        key: String,
        /// Window in days (1, 7, 30 or 365)
        #[arg(long)]
        days: Option<DurationWindow>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging = LoggingConfig::from_env();

    // Logs go to stderr, stdout carries the panel JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.dir.clone());
    let source = JsonFileSource::new(data_dir);
    info!("Reading analytics from {}", source.root().display());

    let output = match cli.command {
        Commands::Clicks { key, days } => {
            let window = days.unwrap_or(config.charts.default_window);
            let panel = clicks_panel(&source, &key, window).await;
            serde_json::to_string_pretty(&panel)
        }
        Commands::Geo { key, days } => {
            let window = days.unwrap_or(config.charts.default_window);
            let panel = geo_panel(&source, &key, window).await;
            serde_json::to_string_pretty(&panel)
        }
    }
    .context("Failed to serialize chart panel")?;

    println!("{output}");
    Ok(())
}

async fn clicks_panel(
    source: &dyn AnalyticsSource,
    key: &str,
    window: DurationWindow,
) -> ClicksPanel {
    let records = clicks_or_empty(source, key, window).await;
    info!(
        "Building clicks panel for '{}' ({} records, last {})",
        key,
        records.len(),
        window.description()
    );
    ClicksPanel::build(&records, window, Utc::now())
}

async fn geo_panel(source: &dyn AnalyticsSource, key: &str, window: DurationWindow) -> GeoPanel {
    let records = visits_or_empty(source, key, window).await;
    info!(
        "Building geo panel for '{}' ({} visits, last {})",
        key,
        records.len(),
        window.description()
    );
    GeoPanel::build(&records)
}
