//! Sample statistics for price series and simulation results.
//!
//! ## Realised Volatility
//!
//! ```text
//! r_t   = ln(P_t / P_{t-1})
//! σ_ann = stdev(r) · √252
//! ```
//!
//! The standard deviation uses the sample (n - 1) denominator.

use crate::types::error::PricingError;
use crate::types::path::MIN_HISTORICAL_POINTS;

/// Trading days per year used to annualise daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns `None` when fewer than two values are supplied.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|&x| (x - m) * (x - m)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Log returns `ln(P_t / P_{t-1})` of consecutive prices.
///
/// The result has one fewer element than `prices`.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

/// Annualised realised volatility of a daily price series.
///
/// # Errors
/// - `PricingError::EmptyOrMismatchedSeries` if fewer than two prices are given
/// - `PricingError::NonPositivePrice` if any price is not positive and finite
/// - `PricingError::InvalidParameter` on `volatility` for a two-point series
///   (one return cannot give a sample standard deviation)
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::realised_volatility;
///
/// // Constant growth has zero dispersion of returns
/// let prices: Vec<f64> = (0..10).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
/// let sigma = realised_volatility(&prices).unwrap();
/// assert!(sigma < 1e-10);
/// ```
pub fn realised_volatility(prices: &[f64]) -> Result<f64, PricingError> {
    if prices.len() < MIN_HISTORICAL_POINTS {
        return Err(PricingError::series_length(
            MIN_HISTORICAL_POINTS,
            prices.len(),
        ));
    }

    if let Some((index, &value)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(PricingError::NonPositivePrice { index, value });
    }

    let returns = log_returns(prices);
    let daily = sample_std_dev(&returns).ok_or_else(|| {
        PricingError::invalid_parameter(
            "volatility",
            f64::NAN,
            "needs at least two returns to estimate",
        )
    })?;

    Ok(daily * TRADING_DAYS_PER_YEAR.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_sample_std_dev() {
        // Sample variance of [2, 4, 4, 4, 5, 5, 7, 9] is 32/7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert_relative_eq!(sd, (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert!(sample_std_dev(&[1.0]).is_none());
    }

    #[test]
    fn test_log_returns() {
        let returns = log_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[0], (1.1_f64).ln(), epsilon = 1e-12);
        assert_relative_eq!(returns[1], (0.9_f64).ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_realised_volatility_known_value() {
        // Alternating +/- 1% log moves: daily sample stdev = 0.01 * sqrt(n/(n-1))
        let mut prices = vec![100.0];
        for i in 0..10 {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let next = prices[i] * (sign * 0.01_f64).exp();
            prices.push(next);
        }
        let sigma = realised_volatility(&prices).unwrap();
        let daily = 0.01 * (10.0_f64 / 9.0).sqrt();
        assert_relative_eq!(sigma, daily * 252.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_realised_volatility_too_short() {
        assert_eq!(
            realised_volatility(&[100.0]),
            Err(PricingError::EmptyOrMismatchedSeries {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            realised_volatility(&[100.0, 101.0]),
            Err(PricingError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_realised_volatility_bad_price() {
        assert!(matches!(
            realised_volatility(&[100.0, -5.0, 101.0]),
            Err(PricingError::NonPositivePrice { index: 1, .. })
        ));
    }
}
