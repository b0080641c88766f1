//! Geometric Brownian Motion (GBM) path generation.
//!
//! GBM is the asset price dynamics assumed by Black-Scholes:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate (risk-neutral drift)
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! Paths use the exact solution, so there is no discretisation bias:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*z),  z ~ N(0, 1)
//! ```

use pricer_core::types::error::ensure_finite;
use pricer_core::types::{PricePath, PricingError};

use super::stochastic::NormalSource;

/// GBM path parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GbmParams {
    spot: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
}

impl GbmParams {
    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate (annualised)
    /// * `volatility` - Volatility (must be non-negative)
    /// * `maturity` - Horizon in years (must be non-negative)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending input.
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Result<Self, PricingError> {
        let spot = ensure_finite("spot", spot)?;
        let rate = ensure_finite("rate", rate)?;
        let volatility = ensure_finite("volatility", volatility)?;
        let maturity = ensure_finite("expiry", maturity)?;

        if spot <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "spot",
                spot,
                "initial spot must be positive",
            ));
        }
        if volatility < 0.0 {
            return Err(PricingError::invalid_parameter(
                "volatility",
                volatility,
                "must be non-negative",
            ));
        }
        if maturity < 0.0 {
            return Err(PricingError::invalid_parameter(
                "expiry",
                maturity,
                "must be non-negative",
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            maturity,
        })
    }

    /// Initial spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Horizon in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Advances `spot` by one exact lognormal step of length `dt` with shock `z`.
    #[inline]
    pub fn exact_step(&self, spot: f64, dt: f64, z: f64) -> f64 {
        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * dt;
        let diffusion = self.volatility * dt.sqrt() * z;
        spot * (drift + diffusion).exp()
    }
}

/// Generates one GBM path of `n_steps + 1` prices starting exactly at S0.
///
/// Draws exactly `n_steps` normals from `source`; `n_steps == 0` returns
/// `[S0]` without drawing.
///
/// # Errors
/// `PricingError::NonPositivePrice` if the path overflows to infinity or
/// underflows to zero, which only happens for extreme parameters.
///
/// # Examples
/// ```
/// use pricer_models::models::{generate_gbm_path, ConstantNormal, GbmParams};
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
/// let path = generate_gbm_path(&params, 4, &mut ConstantNormal(0.0)).unwrap();
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.first(), 100.0);
/// // Drift-only path: S_T = S0 * exp((r - 0.5 sigma^2) T)
/// assert!((path.last() - 100.0 * (0.03_f64).exp()).abs() < 1e-10);
/// ```
pub fn generate_gbm_path<N: NormalSource + ?Sized>(
    params: &GbmParams,
    n_steps: usize,
    source: &mut N,
) -> Result<PricePath, PricingError> {
    let mut prices = Vec::with_capacity(n_steps + 1);
    prices.push(params.spot);

    if n_steps > 0 {
        let dt = params.maturity / n_steps as f64;
        let mut spot = params.spot;
        for _ in 0..n_steps {
            spot = params.exact_step(spot, dt, source.next_normal());
            prices.push(spot);
        }
    }

    PricePath::new(prices)
}
