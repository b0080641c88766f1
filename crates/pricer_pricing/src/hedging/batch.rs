//! Parallel Monte Carlo batches of synthetic hedging runs.
//!
//! Each run owns its own [`PricerRng`] seeded from the batch's base seed and
//! the run index, so the summary is identical for any thread count.

use pricer_core::math::statistics::{mean, sample_std_dev};
use pricer_core::types::PricingError;
use rayon::prelude::*;
use tracing::debug;

use super::config::ContractParams;
use super::simulator::simulate_synthetic;
use crate::rng::{stream_seed, PricerRng};

/// Maximum number of runs in one batch.
pub const MAX_RUNS: usize = 1_000_000;

/// Batch size and seeding.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::BatchConfig;
///
/// let config = BatchConfig::new(1_000, Some(42)).unwrap();
/// assert_eq!(config.n_runs(), 1_000);
/// assert!(BatchConfig::new(0, None).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    n_runs: usize,
    seed: Option<u64>,
}

impl BatchConfig {
    /// Creates a batch configuration.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` unless `1 <= n_runs <= MAX_RUNS`.
    pub fn new(n_runs: usize, seed: Option<u64>) -> Result<Self, PricingError> {
        if n_runs == 0 || n_runs > MAX_RUNS {
            return Err(PricingError::invalid_parameter(
                "n_runs",
                n_runs as f64,
                "must be in range [1, 1_000_000]",
            ));
        }
        Ok(Self { n_runs, seed })
    }

    /// Number of independent runs.
    #[inline]
    pub fn n_runs(&self) -> usize {
        self.n_runs
    }

    /// Base seed; `None` draws one from entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Distribution of final hedging errors across a batch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Base seed the run seeds were derived from
    pub base_seed: u64,
    /// Final P&L of each run, in run order
    pub final_pnls: Vec<f64>,
    /// Mean final P&L
    pub mean: f64,
    /// Sample standard deviation (0 for a single run)
    pub std_dev: f64,
    /// Smallest final P&L
    pub min: f64,
    /// Largest final P&L
    pub max: f64,
}

impl BatchSummary {
    fn from_pnls(base_seed: u64, final_pnls: Vec<f64>) -> Self {
        let (min, max) = final_pnls
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Self {
            base_seed,
            mean: mean(&final_pnls).unwrap_or(f64::NAN),
            std_dev: sample_std_dev(&final_pnls).unwrap_or(0.0),
            min,
            max,
            final_pnls,
        }
    }

    /// Number of runs.
    #[inline]
    pub fn n_runs(&self) -> usize {
        self.final_pnls.len()
    }
}

/// Runs `config.n_runs()` independent synthetic hedging simulations in parallel.
///
/// Run `i` uses the seed `stream_seed(base_seed, i)`, so a single run can be
/// replayed on its own with `Scenario::Synthetic { seed }`.
///
/// # Errors
/// The first `PricingError` raised by any run.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::{run_batch, BatchConfig, ContractParams};
///
/// let contract = ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let summary = run_batch(&contract, 52, BatchConfig::new(64, Some(1)).unwrap()).unwrap();
///
/// assert_eq!(summary.n_runs(), 64);
/// assert!(summary.min <= summary.mean && summary.mean <= summary.max);
/// ```
pub fn run_batch(
    contract: &ContractParams,
    n_steps: usize,
    config: BatchConfig,
) -> Result<BatchSummary, PricingError> {
    let base_seed = match config.seed {
        Some(seed) => seed,
        None => PricerRng::from_entropy().seed(),
    };
    debug!(
        base_seed,
        n_runs = config.n_runs,
        n_steps,
        "running hedging batch"
    );

    let final_pnls = (0..config.n_runs)
        .into_par_iter()
        .map(|index| {
            let mut rng = PricerRng::from_seed(stream_seed(base_seed, index));
            simulate_synthetic(contract, n_steps, &mut rng).map(|trace| trace.final_pnl())
        })
        .collect::<Result<Vec<f64>, PricingError>>()?;

    let summary = BatchSummary::from_pnls(base_seed, final_pnls);
    debug!(
        mean = summary.mean,
        std_dev = summary.std_dev,
        "hedging batch complete"
    );
    Ok(summary)
}
