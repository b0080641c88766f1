//! Batch command implementation
//!
//! Runs many independent synthetic hedging simulations in parallel and
//! summarises the distribution of the final hedging error.

use pricer_pricing::hedging::{run_batch, BatchConfig};
use std::path::Path;
use tracing::info;

use crate::config::HedgeConfig;
use crate::report;
use crate::Result;

/// Run the batch command
pub fn run(config: &HedgeConfig, json: Option<&Path>) -> Result<()> {
    let contract = config.synthetic_contract()?;
    let n_steps = config.synthetic_steps();
    let batch = BatchConfig::new(config.runs, config.seed)?;

    info!("Starting Monte Carlo batch...");
    info!("  Runs: {}", batch.n_runs());
    info!("  Steps per run: {}", n_steps);

    let summary = run_batch(&contract, n_steps, batch)?;

    report::print_batch_summary(&contract, n_steps, &summary);

    if let Some(path) = json {
        report::write_json(path, &summary)?;
    }

    info!("Batch complete");
    Ok(())
}
