//! AeroStream CLI — query the flight API from the terminal.
//!
//! Commands:
//! - `flights` — print all flight records as JSON (`[]` when unavailable)
//! - `stats` — print the statistics body as JSON (`null` when unavailable)
//! - `summary` — count flights per efficiency status
//! - `health` — check that the backend is up

use aerostream_core::{ApiClient, ApiConfig, ApiEnvironment, FlightStatus, FlightSummary};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aerostream",
    about = "AeroStream CLI — live flight efficiency data"
)]
struct Cli {
    /// API base URL (e.g. http://localhost:8000/api). Overrides --local and --config.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Talk to a backend running on localhost:8000.
    #[arg(long, global = true, default_value_t = false)]
    local: bool,

    /// Path to a TOML config file with `base_url` or `environment`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all flight records as pretty JSON.
    Flights,
    /// Print the statistics body as pretty JSON.
    Stats,
    /// Count flights per efficiency status.
    Summary,
    /// Check that the backend is reachable and healthy.
    Health,
}

impl Cli {
    fn api_config(&self) -> Result<ApiConfig> {
        if let Some(url) = &self.base_url {
            return Ok(ApiConfig::with_base_url(url)?);
        }
        if self.local {
            return Ok(ApiConfig::for_environment(ApiEnvironment::Local));
        }
        if let Some(path) = &self.config {
            return ApiConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()));
        }
        Ok(ApiConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.api_config()?;
    debug!(base_url = config.base_url(), "using API");
    let client = ApiClient::new(config);

    match cli.command {
        Commands::Flights => run_flights(&client).await,
        Commands::Stats => run_stats(&client).await,
        Commands::Summary => run_summary(&client).await,
        Commands::Health => run_health(&client).await,
    }
}

async fn run_flights(client: &ApiClient) -> Result<()> {
    let flights = client.get_flights().await;
    println!("{}", serde_json::to_string_pretty(&flights)?);
    Ok(())
}

async fn run_stats(client: &ApiClient) -> Result<()> {
    let stats = client.get_stats().await;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

async fn run_summary(client: &ApiClient) -> Result<()> {
    let outcome = client.fetch_flights().await;
    if outcome.is_fallback() {
        println!("No flight data available.");
        return Ok(());
    }

    let Some(records) = outcome.value().as_array() else {
        bail!("flights endpoint did not return a list of flight records");
    };

    let summary = FlightSummary::from_records(records);
    info!(total = summary.total, "summarized flights");

    println!("Flights: {}", summary.total);
    for status in [
        FlightStatus::Optimal,
        FlightStatus::Inefficient,
        FlightStatus::Raw,
        FlightStatus::Unknown,
    ] {
        let count = summary.count(status);
        if count > 0 {
            println!("  {status:<12} {count}");
        }
    }
    Ok(())
}

async fn run_health(client: &ApiClient) -> Result<()> {
    let health = client
        .check_health()
        .await
        .with_context(|| format!("health check against {}", client.config().base_url()))?;

    if !health.is_ok() {
        bail!("backend reports status '{}': {}", health.status, health.message);
    }
    println!("{}", health.message);
    Ok(())
}
