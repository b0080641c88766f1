//! Black-Scholes pricing model for European call options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Expiry Boundary
//!
//! At T = 0 the general formula divides by zero, so the contract falls back
//! to its closed-form limits: price = max(S - K, 0), delta = 1 if S > K else 0,
//! gamma = theta = 0. A zero spot is treated the same way because GBM never
//! leaves zero.

use num_traits::Float;

use super::distributions::{lit, norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Price and Greeks of a European call, all derived from one d₁/d₂ pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks<T: Float = f64> {
    /// Option value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂t per year (usually negative)
    pub theta: T,
}

/// European call option under Black-Scholes dynamics.
///
/// An immutable value over the five contract scalars. The hedging engine
/// builds a fresh contract at every rebalancing step with the current spot
/// and the remaining time to expiry; nothing is cached between calls.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::EuropeanCall;
///
/// let call = EuropeanCall::new(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((call.price() - 10.4506).abs() < 1e-3);
/// assert!((call.delta() - 0.6368).abs() < 1e-3);
///
/// // Expired contracts return intrinsic value exactly
/// let expired = EuropeanCall::new(110.0_f64, 100.0, 0.0, 0.05, 0.2).unwrap();
/// assert_eq!(expired.price(), 10.0);
/// assert_eq!(expired.delta(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EuropeanCall<T: Float = f64> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: Float> EuropeanCall<T> {
    /// Creates a new contract.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (non-negative)
    /// * `strike` - Strike price (positive)
    /// * `expiry` - Time to expiry in years (non-negative)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `volatility` - Volatility (positive whenever `expiry > 0`)
    ///
    /// # Errors
    /// - `AnalyticalError::NonFinite` if any input is NaN or infinite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidSpot` if spot < 0
    /// - `AnalyticalError::InvalidExpiry` if expiry < 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 and expiry > 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanCall;
    ///
    /// assert!(EuropeanCall::new(100.0_f64, 0.0, 1.0, 0.05, 0.2).is_err());
    /// assert!(EuropeanCall::new(100.0_f64, 100.0, 1.0, 0.05, 0.0).is_err());
    ///
    /// // Volatility is irrelevant once the option has expired
    /// assert!(EuropeanCall::new(100.0_f64, 100.0, 0.0, 0.05, 0.0).is_ok());
    /// ```
    pub fn new(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        for (name, value) in [
            ("spot", spot),
            ("strike", strike),
            ("expiry", expiry),
            ("rate", rate),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFinite {
                    name,
                    value: as_f64(value),
                });
            }
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: as_f64(strike),
            });
        }

        if spot < zero {
            return Err(AnalyticalError::InvalidSpot { spot: as_f64(spot) });
        }

        if expiry < zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }

        if expiry > zero && volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// `true` when the closed-form limits apply (T = 0 or S = 0).
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.expiry <= T::zero() || self.spot <= T::zero()
    }

    /// Payoff if exercised now: max(S - K, 0).
    #[inline]
    pub fn intrinsic(&self) -> T {
        (self.spot - self.strike).max(T::zero())
    }

    /// Computes (d₁, d₂), or `None` when the contract is frozen.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanCall;
    ///
    /// // ATM with r = 0: d₁ = σ√T / 2, d₂ = -σ√T / 2
    /// let call = EuropeanCall::new(100.0_f64, 100.0, 1.0, 0.0, 0.2).unwrap();
    /// let (d1, d2) = call.d1_d2().unwrap();
    /// assert!((d1 - 0.1).abs() < 1e-12);
    /// assert!((d2 + 0.1).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn d1_d2(&self) -> Option<(T, T)> {
        if self.is_frozen() {
            return None;
        }

        let vol_sqrt_t = self.volatility * self.expiry.sqrt();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + lit::<T>(0.5) * self.volatility * self.volatility) * self.expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Some((d1, d1 - vol_sqrt_t))
    }

    /// Computes the call price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂), or exactly max(S - K, 0) when frozen.
    #[inline]
    pub fn price(&self) -> T {
        match self.d1_d2() {
            Some((d1, d2)) => self.price_from(d1, d2),
            None => self.intrinsic(),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// N(d₁); at the boundary 1 if S > K else 0 (at-the-money maps to 0).
    #[inline]
    pub fn delta(&self) -> T {
        match self.d1_d2() {
            Some((d1, _)) => norm_cdf(d1),
            None => self.boundary_delta(),
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T); zero at the boundary.
    #[inline]
    pub fn gamma(&self) -> T {
        match self.d1_d2() {
            Some((d1, _)) => self.gamma_from(d1),
            None => T::zero(),
        }
    }

    /// Computes Theta (∂V/∂t) per year.
    ///
    /// Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂); zero at the boundary.
    #[inline]
    pub fn theta(&self) -> T {
        match self.d1_d2() {
            Some((d1, d2)) => self.theta_from(d1, d2),
            None => T::zero(),
        }
    }

    /// Computes price, delta, gamma and theta from a single d₁/d₂ evaluation.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::EuropeanCall;
    ///
    /// let call = EuropeanCall::new(105.0_f64, 100.0, 0.5, 0.03, 0.25).unwrap();
    /// let greeks = call.greeks();
    /// assert_eq!(greeks.price, call.price());
    /// assert_eq!(greeks.delta, call.delta());
    /// assert_eq!(greeks.gamma, call.gamma());
    /// assert_eq!(greeks.theta, call.theta());
    /// ```
    pub fn greeks(&self) -> Greeks<T> {
        match self.d1_d2() {
            Some((d1, d2)) => Greeks {
                price: self.price_from(d1, d2),
                delta: norm_cdf(d1),
                gamma: self.gamma_from(d1),
                theta: self.theta_from(d1, d2),
            },
            None => Greeks {
                price: self.intrinsic(),
                delta: self.boundary_delta(),
                gamma: T::zero(),
                theta: T::zero(),
            },
        }
    }

    #[inline]
    fn discount(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    #[inline]
    fn boundary_delta(&self) -> T {
        if self.spot > self.strike {
            T::one()
        } else {
            T::zero()
        }
    }

    #[inline]
    fn price_from(&self, d1: T, d2: T) -> T {
        let value = self.spot * norm_cdf(d1) - self.strike * self.discount() * norm_cdf(d2);
        // The CDF approximation can leave a deep out-of-the-money value a hair below zero
        value.max(T::zero())
    }

    #[inline]
    fn gamma_from(&self, d1: T) -> T {
        norm_pdf(d1) / (self.spot * self.volatility * self.expiry.sqrt())
    }

    #[inline]
    fn theta_from(&self, d1: T, d2: T) -> T {
        let decay =
            -(self.spot * self.volatility * norm_pdf(d1)) / (lit::<T>(2.0) * self.expiry.sqrt());
        decay - self.rate * self.strike * self.discount() * norm_cdf(d2)
    }
}
