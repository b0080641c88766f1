//! Backtest command implementation
//!
//! Hedges an at-the-money call along an observed close-price series.
//! Unless overridden, the strike is the first close and the volatility is
//! the realised volatility of the series.

use pricer_core::math::statistics::realised_volatility;
use pricer_pricing::hedging::{self, ContractParams, Scenario, SimulationConfig};
use std::path::Path;
use tracing::{info, warn};

use super::OutputOptions;
use crate::config::HedgeConfig;
use crate::market_data;
use crate::report::{self, RunReport};
use crate::Result;

/// Run the backtest command
pub fn run(
    config: &HedgeConfig,
    market_data: &Path,
    column: &str,
    spot_overridden: bool,
    output: &OutputOptions,
) -> Result<()> {
    info!("Starting backtest...");
    info!("  Market data: {}", market_data.display());

    let series = market_data::load_closes(market_data, column)?;
    if let Some((first, last)) = series.date_range() {
        info!("  Period: {} to {}", first, last);
    }
    info!("  Closes: {}", series.path.len());

    if spot_overridden {
        warn!("--spot is ignored by backtest: the first close is the initial spot");
    }

    let spot = series.path.first();
    let strike = config.strike.unwrap_or(spot);
    let volatility = match config.volatility {
        Some(volatility) => volatility,
        None => {
            let realised = realised_volatility(series.path.as_slice())?;
            info!("  Realised volatility: {:.4}", realised);
            realised
        }
    };

    let contract = ContractParams::new(spot, strike, config.expiry, config.rate, volatility)?;

    let mut builder = SimulationConfig::builder()
        .contract(contract)
        .scenario(Scenario::Historical(series.path));
    if let Some(n_steps) = config.n_steps {
        builder = builder.n_steps(n_steps);
    }
    let simulation = builder.build()?;

    let trace = hedging::run(&simulation)?;

    report::print_run_summary("backtest", &contract, &trace);

    if let Some(path) = &output.trace_csv {
        report::write_trace_csv(path, &trace)?;
    }
    if let Some(path) = &output.json {
        report::write_json(
            path,
            &RunReport {
                mode: "backtest",
                contract: &contract,
                final_pnl: trace.final_pnl(),
                trace: &trace,
            },
        )?;
    }

    info!("Backtest complete");
    Ok(())
}
