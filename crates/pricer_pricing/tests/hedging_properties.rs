//! End-to-end properties of the delta-hedging simulator.
//!
//! # Test Categories
//!
//! 1. **Structural invariants**: trace length and self-financing on arbitrary paths
//! 2. **Replication**: hedging error shrinks with rebalancing frequency
//! 3. **Historical replay**: observed series with realised volatility

use approx::assert_relative_eq;
use pricer_core::math::statistics::realised_volatility;
use pricer_core::types::PricePath;
use pricer_models::models::ReplayNormal;
use pricer_pricing::hedging::{
    run, run_batch, simulate, simulate_synthetic, BatchConfig, ContractParams, Scenario,
    SimulationConfig,
};
use proptest::prelude::*;

fn contract(rate: f64, volatility: f64) -> ContractParams {
    ContractParams::new(100.0, 100.0, 1.0, rate, volatility).unwrap()
}

// ============================================================================
// Structural invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_trace_length(
        n_steps in 0usize..200,
        strike in 60.0..140.0_f64,
        draws in prop::collection::vec(-3.0..3.0_f64, 1..16),
    ) {
        let contract = ContractParams::new(100.0, strike, 1.0, 0.05, 0.2).unwrap();
        let trace = simulate_synthetic(&contract, n_steps, &mut ReplayNormal::new(draws)).unwrap();
        prop_assert_eq!(trace.len(), n_steps + 1);
        prop_assert_eq!(trace.pnl().len(), n_steps + 1);
    }

    #[test]
    fn prop_self_financing(
        prices in prop::collection::vec(50.0..150.0_f64, 2..60),
        strike in 80.0..120.0_f64,
        volatility in 0.1..0.5_f64,
    ) {
        let contract = ContractParams::new(prices[0], strike, 0.5, 0.03, volatility).unwrap();
        let trace = simulate(&contract, &PricePath::new(prices).unwrap()).unwrap();
        let entries = trace.entries();

        for i in 1..entries.len() {
            let spot = entries[i].spot;
            let carried = entries[i - 1].stock_holding * spot + entries[i - 1].cash;
            let held = entries[i].stock_holding * spot + entries[i].cash;
            prop_assert!((held - carried).abs() < 1e-8, "step {}: {} vs {}", i, held, carried);
        }
    }

    #[test]
    fn prop_hedge_ratio_is_a_probability(
        prices in prop::collection::vec(50.0..150.0_f64, 2..40),
    ) {
        let contract = ContractParams::new(prices[0], 100.0, 1.0, 0.05, 0.2).unwrap();
        let trace = simulate(&contract, &PricePath::new(prices).unwrap()).unwrap();
        prop_assert!(trace.iter().all(|e| (0.0..=1.0).contains(&e.delta)));
    }
}

// ============================================================================
// Replication quality
// ============================================================================

#[test]
fn test_frequent_rebalancing_mean_error_near_zero() {
    // With r = 0 the uninvested cash earns exactly the risk-free rate, so the
    // hedge replicates the call as rebalancing becomes continuous
    let summary = run_batch(&contract(0.0, 0.2), 252, BatchConfig::new(2_000, Some(42)).unwrap())
        .unwrap();

    assert!(summary.mean.abs() < 0.1, "mean = {}", summary.mean);
    assert!(summary.std_dev < 1.0, "std = {}", summary.std_dev);
}

#[test]
fn test_hedging_error_shrinks_with_frequency() {
    let monthly = run_batch(&contract(0.0, 0.2), 12, BatchConfig::new(1_000, Some(7)).unwrap())
        .unwrap();
    let daily = run_batch(&contract(0.0, 0.2), 252, BatchConfig::new(1_000, Some(7)).unwrap())
        .unwrap();

    // Dispersion scales roughly with 1/sqrt(n_steps): sqrt(252 / 12) ≈ 4.6
    assert!(
        daily.std_dev < monthly.std_dev / 2.0,
        "daily {} vs monthly {}",
        daily.std_dev,
        monthly.std_dev
    );
}

#[test]
fn test_batch_independent_of_thread_pool() {
    let config = BatchConfig::new(64, Some(5)).unwrap();
    let default_pool = run_batch(&contract(0.05, 0.2), 20, config).unwrap();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let single_thread = pool.install(|| run_batch(&contract(0.05, 0.2), 20, config).unwrap());

    assert_eq!(default_pool, single_thread);
}

// ============================================================================
// Historical replay
// ============================================================================

#[test]
fn test_historical_replay_with_realised_volatility() {
    let closes = vec![
        470.0, 472.6, 468.3, 471.9, 476.4, 474.1, 479.8, 481.2, 478.5, 483.0, 486.7,
    ];
    let volatility = realised_volatility(&closes).unwrap();
    let path = PricePath::historical(closes.clone()).unwrap();

    let contract = ContractParams::new(closes[0], closes[0], 1.0, 0.05, volatility).unwrap();
    let config = SimulationConfig::builder()
        .contract(contract)
        .scenario(Scenario::Historical(path))
        .build()
        .unwrap();

    let trace = run(&config).unwrap();
    assert_eq!(trace.len(), closes.len());
    assert_eq!(trace.spots(), closes);
    assert_relative_eq!(trace.premium(), contract.premium(), epsilon = 1e-12);

    let terminal = trace.terminal().unwrap();
    assert_relative_eq!(terminal.option_value, 486.7 - 470.0, epsilon = 1e-9);
    assert!(trace.final_pnl().is_finite());
}

#[test]
fn test_historical_rejects_bad_series() {
    assert!(PricePath::historical(vec![100.0]).is_err());
    assert!(PricePath::historical(vec![100.0, -1.0, 102.0]).is_err());
}
