//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for synthetic hedging scenarios.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator carries its seed, even when drawn from entropy
//! - **Injection**: [`PricerRng`] implements `NormalSource`, so path generation
//!   never depends on a concrete generator
//! - **Independence across runs**: batch runs derive one seed per run with
//!   [`stream_seed`], so results do not depend on thread scheduling
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::models::NormalSource;
//! use pricer_pricing::rng::{stream_seed, PricerRng};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.next_normal();
//! assert!(z.is_finite());
//!
//! // Distinct, deterministic seeds per batch run
//! assert_ne!(stream_seed(12345, 0), stream_seed(12345, 1));
//! ```

mod prng;

pub use prng::PricerRng;

/// Odd 64-bit constant (2^64 / golden ratio) spreading run indices across the seed space.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed of run `index` from a batch's base seed.
///
/// Multiplication by an odd constant is a bijection modulo 2^64, so distinct
/// indices always map to distinct seeds for a given base.
#[inline]
pub fn stream_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add((index as u64).wrapping_mul(SEED_STRIDE))
}
