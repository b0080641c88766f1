//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes price of a European call
//! - Analytical Greeks (Delta, Gamma, Theta)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` in production, `f32` where precision allows
//! - **Shared d₁/d₂**: every Greek in one call comes from the same d₁/d₂ pair
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{EuropeanCall, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
