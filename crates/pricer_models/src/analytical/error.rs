//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Contract parameters rejected by the Black-Scholes model

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: Negative spot price
/// - `InvalidStrike`: Non-positive strike
/// - `InvalidExpiry`: Negative time to expiry
/// - `InvalidVolatility`: Non-positive volatility on a live contract
/// - `NonFinite`: NaN or infinite input
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Negative spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Negative time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Non-positive volatility while time to expiry is positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite {name}: {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { spot } => {
                PricingError::invalid_parameter("spot", spot, "must be non-negative")
            }
            AnalyticalError::InvalidStrike { strike } => {
                PricingError::invalid_parameter("strike", strike, "must be positive")
            }
            AnalyticalError::InvalidExpiry { expiry } => {
                PricingError::invalid_parameter("expiry", expiry, "must be non-negative")
            }
            AnalyticalError::InvalidVolatility { volatility } => PricingError::invalid_parameter(
                "volatility",
                volatility,
                "must be positive before expiry",
            ),
            AnalyticalError::NonFinite { name, value } => {
                PricingError::invalid_parameter(name, value, "must be finite")
            }
        }
    }
}
