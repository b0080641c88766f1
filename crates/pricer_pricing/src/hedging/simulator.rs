//! Discrete delta-hedging loop.
//!
//! A short call is hedged by holding `delta` shares, rebalanced at each point
//! of an evenly spaced grid over the option's life. The cash account starts
//! with the premium and absorbs every trade; it earns no interest. At expiry
//! the position is marked against the payoff to give the hedging error.

use pricer_core::types::{PricePath, PricingError, TimeGrid};
use pricer_models::models::{generate_gbm_path, GbmParams, NormalSource};
use tracing::{debug, trace};

use super::config::{ContractParams, Scenario, SimulationConfig};
use super::portfolio::HedgePortfolio;
use super::trace::{SimulationTrace, TraceEntry};
use crate::rng::PricerRng;

/// Runs one hedging simulation as described by `config`.
///
/// Synthetic scenarios without a seed draw one from entropy; the seed used is
/// recorded on the returned trace.
///
/// # Errors
/// Propagates any `PricingError` raised while building the path or pricing a step.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::{run, Scenario, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_steps(52)
///     .scenario(Scenario::Synthetic { seed: Some(7) })
///     .build()
///     .unwrap();
///
/// let trace = run(&config).unwrap();
/// assert_eq!(trace.len(), 53);
/// assert_eq!(trace.seed(), Some(7));
/// assert_eq!(run(&config).unwrap().final_pnl(), trace.final_pnl());
/// ```
pub fn run(config: &SimulationConfig) -> Result<SimulationTrace, PricingError> {
    match config.scenario() {
        Scenario::Historical(path) => {
            debug!(
                n_points = path.len(),
                strike = config.contract().strike(),
                volatility = config.contract().volatility(),
                "running historical hedging simulation"
            );
            // Builder validation already ties the path length to n_steps
            simulate(config.contract(), path)
        }
        Scenario::Synthetic { seed } => {
            let mut rng = match seed {
                Some(seed) => PricerRng::from_seed(*seed),
                None => PricerRng::from_entropy(),
            };
            let seed = rng.seed();
            debug!(
                seed,
                n_steps = config.n_steps(),
                spot = config.contract().spot(),
                strike = config.contract().strike(),
                "running synthetic hedging simulation"
            );
            let trace = simulate_synthetic(config.contract(), config.n_steps(), &mut rng)?;
            Ok(trace.with_seed(seed))
        }
    }
}

/// Hedges `contract` along a GBM path drawn from `source`.
///
/// The path starts at the contract's spot and drifts at the risk-free rate
/// with the contract's volatility.
///
/// # Errors
/// `PricingError::InvalidParameter` if the contract spot is zero (GBM needs
/// a positive start), plus anything [`simulate`] raises.
pub fn simulate_synthetic<N: NormalSource + ?Sized>(
    contract: &ContractParams,
    n_steps: usize,
    source: &mut N,
) -> Result<SimulationTrace, PricingError> {
    let params = GbmParams::new(
        contract.spot(),
        contract.rate(),
        contract.volatility(),
        contract.expiry(),
    )?;
    let path = generate_gbm_path(&params, n_steps, source)?;
    simulate(contract, &path)
}

/// Hedges `contract` along an already materialised price path.
///
/// The path holds `n_steps + 1` prices on an even grid over `[0, T]`; its
/// first price is the initial spot, whatever spot `contract` carries.
///
/// # Errors
/// `PricingError::InvalidParameter` if a step's contract fails validation.
///
/// # Examples
/// ```
/// use pricer_core::types::PricePath;
/// use pricer_pricing::hedging::{simulate, ContractParams};
///
/// let contract = ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let path = PricePath::new(vec![100.0]).unwrap();
///
/// // No rebalancing: the premium is kept and the payoff at S0 is owed
/// let trace = simulate(&contract, &path).unwrap();
/// assert_eq!(trace.len(), 1);
/// assert_eq!(trace.final_pnl(), trace.premium());
/// ```
pub fn simulate(contract: &ContractParams, path: &PricePath) -> Result<SimulationTrace, PricingError> {
    let n_steps = path.n_steps();
    let grid = TimeGrid::new(contract.expiry(), n_steps)?;
    grid.check_series_len(path.len())?;

    let premium = contract.call_at(path.first(), contract.expiry())?.price();
    let mut portfolio = HedgePortfolio::new(premium);
    let mut trace = SimulationTrace::with_capacity(premium, n_steps + 1);

    for step in 0..n_steps {
        let spot = path[step];
        let time_left = grid.time_left(step);
        let greeks = contract.call_at(spot, time_left)?.greeks();

        let traded = portfolio.rebalance(greeks.delta, spot);
        let hedge_value = portfolio.value(spot);
        let pnl = hedge_value - greeks.price;

        trace!(step, spot, delta = greeks.delta, traded, pnl, "rebalanced");

        trace.push(TraceEntry {
            step,
            time_left,
            spot,
            delta: greeks.delta,
            option_value: greeks.price,
            cash: portfolio.cash(),
            stock_holding: portfolio.stock_holding(),
            hedge_value,
            pnl,
        });
    }

    let spot = path.last();
    let payoff = (spot - contract.strike()).max(0.0);
    let hedge_value = portfolio.value(spot);
    let final_pnl = hedge_value - payoff;

    trace.push(TraceEntry {
        step: n_steps,
        time_left: 0.0,
        spot,
        delta: portfolio.stock_holding(),
        option_value: payoff,
        cash: portfolio.cash(),
        stock_holding: portfolio.stock_holding(),
        hedge_value,
        pnl: final_pnl,
    });

    debug!(n_steps, premium, payoff, final_pnl, "hedging simulation complete");
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::models::{ConstantNormal, ReplayNormal};

    fn reference_contract() -> ContractParams {
        ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    // ================================================================
    // Trace shape
    // ================================================================

    #[test]
    fn test_trace_length() {
        for n_steps in [0, 1, 2, 12, 52, 252] {
            let trace =
                simulate_synthetic(&reference_contract(), n_steps, &mut ConstantNormal(0.1)).unwrap();
            assert_eq!(trace.len(), n_steps + 1);
            assert_eq!(trace.n_steps(), n_steps);
            for (i, entry) in trace.iter().enumerate() {
                assert_eq!(entry.step, i);
            }
        }
    }

    #[test]
    fn test_time_left_runs_down_to_zero() {
        let trace = simulate_synthetic(&reference_contract(), 4, &mut ConstantNormal(0.0)).unwrap();
        let time_left: Vec<f64> = trace.iter().map(|e| e.time_left).collect();
        assert_eq!(time_left, vec![1.0, 0.75, 0.5, 0.25, 0.0]);
    }

    // ================================================================
    // Reference scenarios
    // ================================================================

    #[test]
    fn test_zero_steps_keeps_premium_against_payoff() {
        // Scenario A with n_steps = 0
        let contract = reference_contract();
        let trace = simulate(&contract, &PricePath::new(vec![100.0]).unwrap()).unwrap();

        assert_relative_eq!(trace.premium(), 10.4506, epsilon = 1e-3);
        assert_eq!(trace.len(), 1);
        let terminal = trace.terminal().unwrap();
        assert_eq!(terminal.stock_holding, 0.0);
        assert_eq!(terminal.cash, trace.premium());
        assert_eq!(trace.final_pnl(), trace.premium() - 0.0);
    }

    #[test]
    fn test_zero_steps_in_the_money() {
        let contract = ContractParams::new(120.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let trace = simulate(&contract, &PricePath::new(vec![120.0]).unwrap()).unwrap();
        assert_relative_eq!(trace.final_pnl(), trace.premium() - 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_step_holds_initial_delta() {
        let contract = reference_contract();
        let trace = simulate_synthetic(&contract, 52, &mut ConstantNormal(0.0)).unwrap();
        let first = &trace.entries()[0];

        assert_relative_eq!(first.delta, 0.6368, epsilon = 1e-3);
        assert_eq!(first.stock_holding, first.delta);
        assert_relative_eq!(first.cash, trace.premium() - first.delta * 100.0, epsilon = 1e-12);
        // Hedge value equals the premium, which equals the option value: P&L starts at zero
        assert_relative_eq!(first.pnl, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_step_flat_path() {
        // One rebalance at S = K and no spot move: the gamma term of the
        // hedging error vanishes, leaving only the time decay of the call
        // over the step. With a single step that decay is the full premium.
        let contract = reference_contract();
        let path = PricePath::new(vec![100.0, 100.0]).unwrap();
        let trace = simulate(&contract, &path).unwrap();
        let (start, end) = (&trace.entries()[0], &trace.entries()[1]);

        assert_eq!(trace.len(), 2);
        // Stock leg is flat, so the hedge portfolio keeps its value
        assert_relative_eq!(end.hedge_value, start.hedge_value, epsilon = 1e-12);
        // Residual is exactly the option's value lost between the two points
        let decay = start.option_value - end.option_value;
        assert_relative_eq!(trace.final_pnl(), decay, epsilon = 1e-12);
        assert_relative_eq!(trace.final_pnl(), trace.premium(), epsilon = 1e-12);

        // At the money, theta steepens towards expiry, so the decay over the
        // step exceeds the step-0 theta carried over the same interval
        let theta = contract.inception().theta();
        assert!(theta < 0.0);
        assert!(decay >= -theta * contract.expiry());
        assert!(decay <= start.option_value);
    }

    #[test]
    fn test_expired_contract_with_steps() {
        // T = 0: every step is at the boundary, delta is 0 or 1
        let contract = ContractParams::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap();
        let path = PricePath::new(vec![110.0, 90.0, 105.0]).unwrap();
        let trace = simulate(&contract, &path).unwrap();

        assert_eq!(trace.premium(), 10.0);
        assert_eq!(trace.entries()[0].delta, 1.0);
        assert_eq!(trace.entries()[1].delta, 0.0);
        assert_eq!(trace.len(), 3);
    }

    // ================================================================
    // Invariants
    // ================================================================

    #[test]
    fn test_self_financing() {
        let mut source = ReplayNormal::new(vec![0.8, -1.3, 0.2, 2.1, -0.4, -0.9, 1.1]);
        let trace = simulate_synthetic(&reference_contract(), 30, &mut source).unwrap();
        let entries = trace.entries();

        for i in 1..entries.len() {
            let spot = entries[i].spot;
            let before = entries[i - 1].stock_holding * spot + entries[i - 1].cash;
            let after = entries[i].stock_holding * spot + entries[i].cash;
            assert_relative_eq!(after, before, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hedge_value_and_pnl_consistent() {
        let mut source = ReplayNormal::new(vec![0.5, -0.5, 1.5]);
        let trace = simulate_synthetic(&reference_contract(), 12, &mut source).unwrap();
        for entry in &trace {
            assert_relative_eq!(
                entry.hedge_value,
                entry.stock_holding * entry.spot + entry.cash,
                epsilon = 1e-12
            );
            assert_relative_eq!(entry.pnl, entry.hedge_value - entry.option_value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_terminal_entry_is_payoff() {
        let trace = simulate_synthetic(&reference_contract(), 10, &mut ConstantNormal(1.0)).unwrap();
        let terminal = trace.terminal().unwrap();
        assert!(terminal.spot > 100.0);
        assert_relative_eq!(terminal.option_value, terminal.spot - 100.0, epsilon = 1e-12);
        assert_eq!(terminal.time_left, 0.0);
    }

    #[test]
    fn test_contract_spot_ignored_for_explicit_path() {
        let contract = reference_contract();
        let path = PricePath::new(vec![80.0, 85.0, 90.0]).unwrap();
        let trace = simulate(&contract, &path).unwrap();
        let expected = contract.call_at(80.0, 1.0).unwrap().price();
        assert_eq!(trace.premium(), expected);
    }

    // ================================================================
    // Entry point
    // ================================================================

    #[test]
    fn test_run_same_seed_same_trace() {
        let config = SimulationConfig::builder()
            .n_steps(52)
            .scenario(Scenario::Synthetic { seed: Some(42) })
            .build()
            .unwrap();
        assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }

    #[test]
    fn test_run_entropy_seed_is_recorded_and_replayable() {
        let config = SimulationConfig::builder().n_steps(20).build().unwrap();
        let trace = run(&config).unwrap();
        let seed = trace.seed().unwrap();

        let replay_config = SimulationConfig::builder()
            .n_steps(20)
            .scenario(Scenario::Synthetic { seed: Some(seed) })
            .build()
            .unwrap();
        assert_eq!(run(&replay_config).unwrap(), trace);
    }

    #[test]
    fn test_run_historical() {
        let path = PricePath::historical(vec![100.0, 102.0, 99.0, 101.0, 104.0]).unwrap();
        let config = SimulationConfig::builder()
            .contract(reference_contract())
            .scenario(Scenario::Historical(path.clone()))
            .build()
            .unwrap();

        let trace = run(&config).unwrap();
        assert_eq!(trace.len(), 5);
        assert_eq!(trace.seed(), None);
        assert_eq!(trace.spots(), path.into_inner());
    }

    #[test]
    fn test_synthetic_rejects_zero_spot() {
        let contract = ContractParams::new(0.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let err = simulate_synthetic(&contract, 5, &mut ConstantNormal(0.0)).unwrap_err();
        assert_eq!(err.parameter_name(), Some("spot"));
    }
}
