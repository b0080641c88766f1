//! Hedge CLI - Delta-Hedging Simulations from the Command Line
//!
//! Hedges a short European call by holding its Black-Scholes delta and
//! reports the hedging error at expiry.
//!
//! # Commands
//!
//! - `hedge backtest --market-data <file>` - Hedge along observed closes
//! - `hedge synthetic` - Hedge along one simulated GBM path
//! - `hedge batch --runs <n>` - Distribution of hedging errors over many paths
//!
//! # Configuration
//!
//! Parameters resolve from CLI flags, then `HEDGE_*` environment variables,
//! then the TOML file given by `--config`, then built-in defaults.
//! `RUST_LOG` takes precedence over the configured log level.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod market_data;
mod report;

pub use error::{CliError, Result};

use commands::OutputOptions;
use config::{build_config, CliOverrides, HedgeConfig};

/// Delta-hedging simulator
#[derive(Parser)]
#[command(name = "hedge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HEDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "HEDGE_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Contract and simulation parameters shared by every command.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Strike price (backtest default: first close)
    #[arg(short = 'k', long, env = "HEDGE_STRIKE")]
    strike: Option<f64>,

    /// Time to expiry in years
    #[arg(short = 't', long, env = "HEDGE_EXPIRY")]
    expiry: Option<f64>,

    /// Annualised risk-free rate
    #[arg(short, long, env = "HEDGE_RATE", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Annualised volatility (backtest default: realised volatility)
    #[arg(long, env = "HEDGE_VOLATILITY")]
    volatility: Option<f64>,

    /// Number of rebalancing steps (backtest default: closes minus one)
    #[arg(short = 'n', long, env = "HEDGE_STEPS")]
    steps: Option<usize>,
}

/// Parameters of synthetic paths.
#[derive(Args, Debug, Default)]
struct PathArgs {
    /// Initial spot price
    #[arg(short, long, env = "HEDGE_SPOT")]
    spot: Option<f64>,

    /// Seed for the normal source (random when omitted)
    #[arg(long, env = "HEDGE_SEED")]
    seed: Option<u64>,
}

/// Report files.
#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Write the full hedging trace to this CSV file
    #[arg(long)]
    trace_csv: Option<PathBuf>,

    /// Write the run report to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hedge along an observed close-price series
    Backtest {
        /// Path to market data CSV
        #[arg(short, long)]
        market_data: PathBuf,

        /// Close-price column name (case-insensitive)
        #[arg(long, default_value = "close")]
        column: String,

        /// Ignored: the first close is the initial spot
        #[arg(short, long, hide = true)]
        spot: Option<f64>,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Hedge along one simulated GBM path
    Synthetic {
        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        params: ParamArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run many synthetic hedges in parallel and summarise the final P&L
    Batch {
        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        params: ParamArgs,

        /// Number of independent runs
        #[arg(long, env = "HEDGE_RUNS")]
        runs: Option<usize>,

        /// Write the batch summary to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (params, path, runs) = match &self.command {
            Commands::Backtest { params, .. } => (params, None, None),
            Commands::Synthetic { path, params, .. } => (params, Some(path), None),
            Commands::Batch {
                path, params, runs, ..
            } => (params, Some(path), *runs),
        };
        CliOverrides {
            spot: path.and_then(|p| p.spot),
            strike: params.strike,
            expiry: params.expiry,
            rate: params.rate,
            volatility: params.volatility,
            n_steps: params.steps,
            seed: path.and_then(|p| p.seed),
            runs,
            log_level: self.log_level.clone(),
        }
    }
}

impl From<OutputArgs> for OutputOptions {
    fn from(args: OutputArgs) -> Self {
        Self {
            trace_csv: args.trace_csv,
            json: args.json,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(command: Commands, config: &HedgeConfig) -> Result<()> {
    match command {
        Commands::Backtest {
            market_data,
            column,
            spot,
            output,
            ..
        } => commands::backtest::run(
            config,
            &market_data,
            &column,
            spot.is_some(),
            &output.into(),
        ),
        Commands::Synthetic { output, .. } => commands::synthetic::run(config, &output.into()),
        Commands::Batch { json, .. } => commands::batch::run(config, json.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = build_config(cli.config.as_deref(), &cli.overrides());

    let log_level = match (&config, cli.verbose) {
        (_, true) => "debug",
        (Ok(config), false) => config.log_level.as_filter_str(),
        (Err(_), false) => "info",
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let result = config
        .map_err(CliError::from)
        .and_then(|config| dispatch(cli.command, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
