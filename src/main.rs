//! Command-line interface for clickstream-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate with the defaults (30 sessions, 0.2 events/sec each)
//! clickstream-gen --catalog-dir ./catalogs --catalog 2019-Nov
//!
//! # Faster run into a custom file
//! clickstream-gen \
//!   --catalog-dir ./catalogs --catalog 2019-Nov \
//!   --output /tmp/clickstream.csv \
//!   --rate 50 --num-generators 100 --min-events 5 --max-events 50
//! ```

use anyhow::Context;
use clap::Parser;
use clickstream_gen::{generate, GenerateConfig};

#[derive(Parser)]
#[command(name = "clickstream-gen")]
#[command(about = "Generates synthetic e-commerce clickstream datasets")]
#[command(long_about = None)]
struct Cli {
    /// Output CSV path; truncated and rewritten on every run
    #[arg(long, short = 'o', default_value = "generated_data.csv")]
    output: std::path::PathBuf,

    /// Directory containing catalog CSV exports
    #[arg(long, env = "CLICKSTREAM_CATALOG_DIR", default_value = "catalogs")]
    catalog_dir: std::path::PathBuf,

    /// Catalog identifier, resolved to <CATALOG_DIR>/<ID>.csv
    #[arg(long, default_value = "2019-Nov")]
    catalog: String,

    /// Events per second for each individual session producer
    #[arg(long, default_value_t = 0.2)]
    rate: f64,

    /// Number of concurrent simulated sessions
    #[arg(long, default_value_t = 30)]
    num_generators: usize,

    /// Inclusive lower bound on events per session
    #[arg(long, default_value_t = 2)]
    min_events: u64,

    /// Inclusive upper bound on events per session
    #[arg(long, default_value_t = 20)]
    max_events: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog_file = catalog_source::catalog_path(&cli.catalog_dir, &cli.catalog);
    let catalog = catalog_source::load_catalog(&catalog_file)
        .with_context(|| format!("Failed to load catalog {catalog_file:?}"))?;

    let config = GenerateConfig {
        output: cli.output,
        rate: cli.rate,
        num_generators: cli.num_generators,
        min_events: cli.min_events,
        max_events: cli.max_events,
    };

    tracing::info!(
        "Starting data generation: {} sessions at {} events/sec each",
        config.num_generators,
        config.rate
    );

    let metrics = generate::run(&config, catalog)
        .await
        .context("Data generation failed")?;

    tracing::info!(
        "Data generation complete: {} rows in {:?} ({:.2} rows/sec)",
        metrics.rows_written,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(())
}
