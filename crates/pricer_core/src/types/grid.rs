//! Evenly spaced time grid over the option horizon.

use super::error::{ensure_finite, PricingError};

/// `n_steps + 1` evenly spaced points covering `[0, horizon]`.
///
/// The first point is exactly `0.0` and, for `n_steps >= 1`, the last point
/// is exactly `horizon`, so the time left at the final step is zero rather
/// than a rounding residue.
///
/// # Examples
/// ```
/// use pricer_core::types::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 4).unwrap();
/// assert_eq!(grid.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.time_left(1), 0.75);
/// assert_eq!(grid.dt(), 0.25);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeGrid {
    horizon: f64,
    points: Vec<f64>,
}

impl TimeGrid {
    /// Builds the grid.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `horizon` is negative or not finite.
    pub fn new(horizon: f64, n_steps: usize) -> Result<Self, PricingError> {
        ensure_finite("expiry", horizon)?;
        if horizon < 0.0 {
            return Err(PricingError::invalid_parameter(
                "expiry",
                horizon,
                "must be non-negative",
            ));
        }

        let points = if n_steps == 0 {
            vec![0.0]
        } else {
            let dt = horizon / n_steps as f64;
            let mut points: Vec<f64> = (0..=n_steps).map(|i| i as f64 * dt).collect();
            points[n_steps] = horizon;
            points
        };

        Ok(Self { horizon, points })
    }

    /// Total horizon in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of intervals.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of points (`n_steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a grid has at least the origin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Step size; `0.0` for a zero-step grid.
    #[inline]
    pub fn dt(&self) -> f64 {
        match self.n_steps() {
            0 => 0.0,
            n => self.horizon / n as f64,
        }
    }

    /// Elapsed time at each point.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Time remaining to the horizon at `step`.
    ///
    /// # Panics
    /// Panics if `step > n_steps`.
    #[inline]
    pub fn time_left(&self, step: usize) -> f64 {
        self.horizon - self.points[step]
    }

    /// Ensures a price series lines up with this grid.
    ///
    /// # Errors
    /// `PricingError::EmptyOrMismatchedSeries` if `series_len != len()`.
    pub fn check_series_len(&self, series_len: usize) -> Result<(), PricingError> {
        if series_len != self.len() {
            return Err(PricingError::series_length(self.len(), series_len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_exact() {
        let grid = TimeGrid::new(1.0, 252).unwrap();
        assert_eq!(grid.len(), 253);
        assert_eq!(grid.points()[0], 0.0);
        assert_eq!(grid.points()[252], 1.0);
        assert_eq!(grid.time_left(252), 0.0);
    }

    #[test]
    fn test_time_left_positive_before_expiry() {
        let grid = TimeGrid::new(1.0, 52).unwrap();
        for i in 0..52 {
            assert!(grid.time_left(i) > 0.0);
        }
        assert_relative_eq!(grid.time_left(51), 1.0 / 52.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_steps() {
        let grid = TimeGrid::new(1.0, 0).unwrap();
        assert_eq!(grid.points(), &[0.0]);
        assert_eq!(grid.n_steps(), 0);
        assert_eq!(grid.dt(), 0.0);
        assert_eq!(grid.time_left(0), 1.0);
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let err = TimeGrid::new(-1.0, 10).unwrap_err();
        assert_eq!(err.parameter_name(), Some("expiry"));
    }

    #[test]
    fn test_nan_horizon_rejected() {
        assert!(TimeGrid::new(f64::NAN, 10).is_err());
    }

    #[test]
    fn test_check_series_len() {
        let grid = TimeGrid::new(1.0, 3).unwrap();
        assert!(grid.check_series_len(4).is_ok());
        assert_eq!(
            grid.check_series_len(5),
            Err(PricingError::EmptyOrMismatchedSeries {
                expected: 4,
                actual: 5
            })
        );
    }
}
