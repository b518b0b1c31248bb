//! Mimosa Energy dashboard binary.
//!
//! ```bash
//! cargo run -- --config dashboard.yaml --seed 42
//! RUST_LOG=mimosa_energy=debug cargo run
//! ```

use std::path::PathBuf;

use clap::Parser;
use mimosa_energy::{run_dashboard, DashboardConfig};

#[derive(Parser, Debug)]
#[command(name = "mimosa-energy", version, about = "Mimosa plant energy dashboard")]
struct Cli {
    /// YAML or JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the simulated sensor for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            DashboardConfig::load(path)?
        }
        None => DashboardConfig::default(),
    };
    if cli.seed.is_some() {
        cfg.simulation.seed = cli.seed;
    }

    run_dashboard(cfg)?;
    Ok(())
}
