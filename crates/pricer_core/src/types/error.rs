//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors raised while validating contract parameters,
//!   price series and simulation inputs
//!
//! Every error aborts the run that raised it. A hedging trace is only
//! meaningful as a complete sequence from inception to expiry, so there is
//! no partial-result recovery.

use thiserror::Error;

/// Categorised pricing and simulation errors.
///
/// # Variants
/// - `InvalidParameter`: A contract or simulation scalar is out of its domain
/// - `EmptyOrMismatchedSeries`: A price series or grid has the wrong length
/// - `NonPositivePrice`: A price series entry is not a positive finite number
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("strike", 0.0, "must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'strike' = 0: must be positive"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Contract scalar or simulation setting outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name (e.g. "strike", "volatility")
        name: &'static str,
        /// The offending value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Price series too short, or its length disagrees with the time grid.
    #[error("Empty or mismatched series: expected {expected} points, got {actual}")]
    EmptyOrMismatchedSeries {
        /// Number of points required
        expected: usize,
        /// Number of points supplied
        actual: usize,
    },

    /// Price series entry that is zero, negative, NaN or infinite.
    #[error("Non-positive price at index {index}: {value}")]
    NonPositivePrice {
        /// Position in the series
        index: usize,
        /// The offending price
        value: f64,
    },
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Creates an `EmptyOrMismatchedSeries` error.
    pub fn series_length(expected: usize, actual: usize) -> Self {
        Self::EmptyOrMismatchedSeries { expected, actual }
    }

    /// Returns the parameter name for `InvalidParameter`, `None` otherwise.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Checks that `value` is finite, returning `InvalidParameter` otherwise.
///
/// Shared by the validating constructors in the model and engine layers.
#[inline]
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_parameter(name, value, "must be finite"))
    }
}
