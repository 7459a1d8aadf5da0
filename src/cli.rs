use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos fixed-order AR/MA forecaster.
#[derive(Parser)]
#[command(name = "kairos", version, about = "Fixed-order AR/MA forecaster")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Forecast from the configured history (AR or residual-driven MA).
    Forecast(ForecastArgs),
    /// Draw stochastic MA paths from simulated innovations.
    Simulate(SimulateArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override the forecast horizon from config.
    #[arg(short = 'H', long)]
    pub horizon: Option<usize>,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override the forecast horizon from config.
    #[arg(short = 'H', long)]
    pub horizon: Option<usize>,

    /// Number of independent paths to draw.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub paths: usize,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
