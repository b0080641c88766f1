//! Spot price series consumed by the hedging engine.

use super::error::PricingError;

/// Minimum number of observations in an externally supplied series.
///
/// A single close has no return to hedge against and no volatility to
/// estimate, so historical input needs at least two points.
pub const MIN_HISTORICAL_POINTS: usize = 2;

/// Ordered sequence of spot prices indexed by step `0..=n_steps`.
///
/// Every entry is a positive finite number. A path is immutable once
/// constructed: the simulator only reads it.
///
/// # Examples
/// ```
/// use pricer_core::types::PricePath;
///
/// let path = PricePath::new(vec![100.0, 102.0, 101.0]).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.n_steps(), 2);
/// assert_eq!(path.first(), 100.0);
/// assert_eq!(path.last(), 101.0);
///
/// assert!(PricePath::new(vec![]).is_err());
/// assert!(PricePath::new(vec![100.0, -1.0]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricePath {
    prices: Vec<f64>,
}

impl PricePath {
    /// Creates a path from raw prices.
    ///
    /// # Errors
    /// - `PricingError::EmptyOrMismatchedSeries` if `prices` is empty
    /// - `PricingError::NonPositivePrice` if any entry is not positive and finite
    pub fn new(prices: Vec<f64>) -> Result<Self, PricingError> {
        if prices.is_empty() {
            return Err(PricingError::series_length(1, 0));
        }

        if let Some((index, &value)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.is_finite() && **p > 0.0))
        {
            return Err(PricingError::NonPositivePrice { index, value });
        }

        Ok(Self { prices })
    }

    /// Creates a path from an externally supplied series (e.g. daily closes).
    ///
    /// Same as [`PricePath::new`] but also rejects series shorter than
    /// [`MIN_HISTORICAL_POINTS`].
    pub fn historical(prices: Vec<f64>) -> Result<Self, PricingError> {
        if prices.len() < MIN_HISTORICAL_POINTS {
            return Err(PricingError::series_length(
                MIN_HISTORICAL_POINTS,
                prices.len(),
            ));
        }
        Self::new(prices)
    }

    /// Number of observations (`n_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always `false`: construction rejects empty series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of increments between observations.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.prices.len() - 1
    }

    /// Spot at step 0.
    #[inline]
    pub fn first(&self) -> f64 {
        self.prices[0]
    }

    /// Spot at the final step.
    #[inline]
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Spot at `step`, if in range.
    #[inline]
    pub fn get(&self, step: usize) -> Option<f64> {
        self.prices.get(step).copied()
    }

    /// Borrowed view of the prices.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    /// Iterator over the prices.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.prices.iter().copied()
    }

    /// Consumes the path, returning the raw prices.
    pub fn into_inner(self) -> Vec<f64> {
        self.prices
    }
}

impl std::ops::Index<usize> for PricePath {
    type Output = f64;

    #[inline]
    fn index(&self, step: usize) -> &f64 {
        &self.prices[step]
    }
}
