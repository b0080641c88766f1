//! Synthetic command implementation
//!
//! Hedges a call along one GBM path generated with the configured parameters.

use pricer_pricing::hedging::{self, Scenario, SimulationConfig};
use tracing::info;

use super::OutputOptions;
use crate::config::HedgeConfig;
use crate::report::{self, RunReport};
use crate::Result;

/// Run the synthetic command
pub fn run(config: &HedgeConfig, output: &OutputOptions) -> Result<()> {
    let contract = config.synthetic_contract()?;
    let n_steps = config.synthetic_steps();

    info!("Starting synthetic hedging run...");
    info!("  Spot: {}", contract.spot());
    info!("  Strike: {}", contract.strike());
    info!("  Volatility: {}", contract.volatility());
    info!("  Steps: {}", n_steps);

    let simulation = SimulationConfig::builder()
        .contract(contract)
        .n_steps(n_steps)
        .scenario(Scenario::Synthetic { seed: config.seed })
        .build()?;

    let trace = hedging::run(&simulation)?;
    if let Some(seed) = trace.seed() {
        info!("  Seed: {}", seed);
    }

    report::print_run_summary("synthetic", &contract, &trace);

    if let Some(path) = &output.trace_csv {
        report::write_trace_csv(path, &trace)?;
    }
    if let Some(path) = &output.json {
        report::write_json(
            path,
            &RunReport {
                mode: "synthetic",
                contract: &contract,
                final_pnl: trace.final_pnl(),
                trace: &trace,
            },
        )?;
    }

    info!("Synthetic run complete");
    Ok(())
}
