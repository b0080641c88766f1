//! Hedging simulation configuration.
//!
//! This module provides the contract parameters, the price-path scenario and
//! a builder for [`SimulationConfig`], validated once at `build()`.

use pricer_core::types::{PricePath, PricingError};
use pricer_models::analytical::EuropeanCall;

/// Default initial spot S0.
pub const DEFAULT_SPOT: f64 = 100.0;
/// Default strike K.
pub const DEFAULT_STRIKE: f64 = 100.0;
/// Default time to expiry T in years.
pub const DEFAULT_EXPIRY: f64 = 1.0;
/// Default risk-free rate r.
pub const DEFAULT_RATE: f64 = 0.05;
/// Default volatility σ.
pub const DEFAULT_VOLATILITY: f64 = 0.2;
/// Default number of rebalancing steps (weekly over one year).
pub const DEFAULT_STEPS: usize = 52;

/// Maximum number of rebalancing steps.
pub const MAX_STEPS: usize = 1_000_000;

/// Option contract hedged by the simulator.
///
/// Holds the full-horizon parameters. The simulator derives a fresh
/// [`EuropeanCall`] from these at every step with the current spot and the
/// remaining time to expiry.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::ContractParams;
///
/// let contract = ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((contract.premium() - 10.4506).abs() < 1e-3);
///
/// assert!(ContractParams::new(100.0, -1.0, 1.0, 0.05, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContractParams {
    inception: EuropeanCall<f64>,
}

impl ContractParams {
    /// Creates validated contract parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for K <= 0, S < 0, T < 0,
    /// σ <= 0 with T > 0, or any non-finite input.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let inception = EuropeanCall::new(spot, strike, expiry, rate, volatility)?;
        Ok(Self { inception })
    }

    /// Initial spot S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.inception.spot()
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.inception.strike()
    }

    /// Time to expiry T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.inception.expiry()
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.inception.rate()
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.inception.volatility()
    }

    /// The contract at inception (initial spot, full horizon).
    #[inline]
    pub fn inception(&self) -> &EuropeanCall<f64> {
        &self.inception
    }

    /// Same contract with a different initial spot.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` is negative or non-finite.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(
            spot,
            self.strike(),
            self.expiry(),
            self.rate(),
            self.volatility(),
        )
    }

    /// Contract observed at `spot` with `time_left` years to expiry.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `spot` or `time_left` is out of domain.
    #[inline]
    pub fn call_at(&self, spot: f64, time_left: f64) -> Result<EuropeanCall<f64>, PricingError> {
        Ok(EuropeanCall::new(
            spot,
            self.strike(),
            time_left,
            self.rate(),
            self.volatility(),
        )?)
    }

    /// Black-Scholes value at inception, the premium received for the short call.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.inception.price()
    }
}

/// Source of the underlying price path.
#[derive(Clone, Debug, PartialEq)]
pub enum Scenario {
    /// Replay an observed price series; the first price is the initial spot.
    Historical(PricePath),
    /// Generate a GBM path. `seed: None` draws a seed from entropy.
    Synthetic {
        /// Seed of the normal source
        seed: Option<u64>,
    },
}

impl Default for Scenario {
    fn default() -> Self {
        Self::Synthetic { seed: None }
    }
}

/// Complete input of one hedging run.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::{Scenario, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_steps(252)
///     .scenario(Scenario::Synthetic { seed: Some(42) })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.contract().strike(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    contract: ContractParams,
    n_steps: usize,
    scenario: Scenario,
}

impl SimulationConfig {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Contract parameters. For historical scenarios the spot equals the first price.
    #[inline]
    pub fn contract(&self) -> &ContractParams {
        &self.contract
    }

    /// Number of rebalancing steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Price-path source.
    #[inline]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` if `n_steps` exceeds [`MAX_STEPS`]
    /// - `PricingError::EmptyOrMismatchedSeries` if a historical path does
    ///   not hold `n_steps + 1` prices
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_steps > MAX_STEPS {
            return Err(PricingError::invalid_parameter(
                "n_steps",
                self.n_steps as f64,
                "exceeds the maximum step count",
            ));
        }
        if let Scenario::Historical(path) = &self.scenario {
            if path.len() != self.n_steps + 1 {
                return Err(PricingError::series_length(self.n_steps + 1, path.len()));
            }
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to the defaults (S0 = 100, K = 100, T = 1,
/// r = 0.05, σ = 0.2, 52 steps, synthetic scenario seeded from entropy).
/// For a historical scenario an unset `n_steps` is taken from the path.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    contract: Option<ContractParams>,
    n_steps: Option<usize>,
    scenario: Scenario,
}

impl SimulationConfigBuilder {
    /// Sets the contract parameters.
    #[inline]
    pub fn contract(mut self, contract: ContractParams) -> Self {
        self.contract = Some(contract);
        self
    }

    /// Sets the number of rebalancing steps.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the price-path source.
    #[inline]
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// See [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        let mut contract = match self.contract {
            Some(contract) => contract,
            None => ContractParams::new(
                DEFAULT_SPOT,
                DEFAULT_STRIKE,
                DEFAULT_EXPIRY,
                DEFAULT_RATE,
                DEFAULT_VOLATILITY,
            )?,
        };

        let n_steps = match (&self.scenario, self.n_steps) {
            (_, Some(n_steps)) => n_steps,
            (Scenario::Historical(path), None) => path.n_steps(),
            (Scenario::Synthetic { .. }, None) => DEFAULT_STEPS,
        };

        if let Scenario::Historical(path) = &self.scenario {
            contract = contract.with_spot(path.first())?;
        }

        let config = SimulationConfig {
            contract,
            n_steps,
            scenario: self.scenario,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_contract() -> ContractParams {
        ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_contract_accessors() {
        let contract = reference_contract();
        assert_eq!(contract.spot(), 100.0);
        assert_eq!(contract.strike(), 100.0);
        assert_eq!(contract.expiry(), 1.0);
        assert_eq!(contract.rate(), 0.05);
        assert_eq!(contract.volatility(), 0.2);
        assert_eq!(contract.premium(), contract.inception().price());
    }

    #[test]
    fn test_call_at_uses_remaining_time() {
        let call = reference_contract().call_at(90.0, 0.25).unwrap();
        assert_eq!(call.spot(), 90.0);
        assert_eq!(call.expiry(), 0.25);
        assert_eq!(call.strike(), 100.0);
    }

    #[test]
    fn test_contract_validation_names_parameter() {
        let cases = [
            (ContractParams::new(100.0, 0.0, 1.0, 0.05, 0.2), "strike"),
            (ContractParams::new(-5.0, 100.0, 1.0, 0.05, 0.2), "spot"),
            (ContractParams::new(100.0, 100.0, -1.0, 0.05, 0.2), "expiry"),
            (ContractParams::new(100.0, 100.0, 1.0, 0.05, 0.0), "volatility"),
            (ContractParams::new(100.0, 100.0, 1.0, f64::INFINITY, 0.2), "rate"),
        ];
        for (result, name) in cases {
            assert_eq!(result.unwrap_err().parameter_name(), Some(name));
        }
    }

    #[test]
    fn test_contract_expired_allows_zero_volatility() {
        let contract = ContractParams::new(100.0, 100.0, 0.0, 0.05, 0.0).unwrap();
        assert_eq!(contract.premium(), 0.0);
    }

    #[test]
    fn test_contract_with_spot() {
        let contract = reference_contract().with_spot(420.0).unwrap();
        assert_eq!(contract.spot(), 420.0);
        assert_eq!(contract.strike(), 100.0);
    }

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config.n_steps(), DEFAULT_STEPS);
        assert_eq!(config.contract(), &reference_contract());
        assert_eq!(config.scenario(), &Scenario::Synthetic { seed: None });
    }

    #[test]
    fn test_builder_historical_infers_steps_and_spot() {
        let path = PricePath::historical(vec![410.0, 415.0, 405.0, 420.0]).unwrap();
        let config = SimulationConfig::builder()
            .scenario(Scenario::Historical(path))
            .build()
            .unwrap();

        assert_eq!(config.n_steps(), 3);
        assert_eq!(config.contract().spot(), 410.0);
    }

    #[test]
    fn test_builder_historical_length_mismatch() {
        let path = PricePath::historical(vec![100.0, 101.0, 102.0]).unwrap();
        let result = SimulationConfig::builder()
            .n_steps(5)
            .scenario(Scenario::Historical(path))
            .build();

        assert_eq!(
            result,
            Err(PricingError::EmptyOrMismatchedSeries {
                expected: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn test_builder_too_many_steps() {
        let result = SimulationConfig::builder().n_steps(MAX_STEPS + 1).build();
        assert_eq!(result.unwrap_err().parameter_name(), Some("n_steps"));
    }

    #[test]
    fn test_builder_zero_steps_allowed() {
        let config = SimulationConfig::builder().n_steps(0).build().unwrap();
        assert_eq!(config.n_steps(), 0);
    }
}
