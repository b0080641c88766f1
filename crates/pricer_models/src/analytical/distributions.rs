//! Standard normal distribution functions.
//!
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Both are generic over `T: Float`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Converts an `f64` constant into `T`.
#[inline]
pub(crate) fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, Abramowitz and Stegun formula 7.1.26.
///
/// Maximum absolute error 1.5e-7 for all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ · erfc(-x / √2), accurate to about 1e-7.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / lit::<T>(std::f64::consts::SQRT_2);
    lit::<T>(0.5) * erfc_approx(arg)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / √(2π)) · exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-lit::<T>(0.5) * x * x).exp()
}
