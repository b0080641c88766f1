//! # Delta-Hedging Simulator
//!
//! Hedges a short European call by holding Black-Scholes delta in the
//! underlying and reports the hedging error at expiry.
//!
//! ## Module Structure
//!
//! - [`config`]: contract parameters, scenarios and the validated run configuration
//! - [`portfolio`]: self-financing stock and cash position
//! - [`trace`]: per-step record of a run
//! - [`simulator`]: the rebalancing loop and its entry points
//! - [`batch`]: parallel batches of independent synthetic runs
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::hedging::{run, ContractParams, Scenario, SimulationConfig};
//!
//! let contract = ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let config = SimulationConfig::builder()
//!     .contract(contract)
//!     .n_steps(252)
//!     .scenario(Scenario::Synthetic { seed: Some(42) })
//!     .build()
//!     .unwrap();
//!
//! let trace = run(&config).unwrap();
//! assert_eq!(trace.len(), 253);
//! println!("Final P&L (Hedging Error): {:.4}", trace.final_pnl());
//! ```

pub mod batch;
pub mod config;
pub mod portfolio;
pub mod simulator;
pub mod trace;

pub use batch::{run_batch, BatchConfig, BatchSummary, MAX_RUNS};
pub use config::{
    ContractParams, Scenario, SimulationConfig, SimulationConfigBuilder, DEFAULT_EXPIRY,
    DEFAULT_RATE, DEFAULT_SPOT, DEFAULT_STEPS, DEFAULT_STRIKE, DEFAULT_VOLATILITY, MAX_STEPS,
};
pub use portfolio::HedgePortfolio;
pub use simulator::{run, simulate, simulate_synthetic};
pub use trace::{SimulationTrace, TraceEntry};
