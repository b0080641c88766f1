//! Injectable source of standard normal draws.
//!
//! Path generation never owns a random number generator. It pulls z ~ N(0, 1)
//! from a `NormalSource`, so production code can pass a seeded PRNG while
//! tests pass a deterministic source.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::stochastic::{ConstantNormal, NormalSource};
//!
//! let mut source = ConstantNormal(0.5);
//! assert_eq!(source.next_normal(), 0.5);
//! assert_eq!(source.next_normal(), 0.5);
//! ```

/// A stream of standard normal variates.
pub trait NormalSource {
    /// Draws the next z ~ N(0, 1).
    fn next_normal(&mut self) -> f64;

    /// Fills `buffer` with consecutive draws.
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for z in buffer.iter_mut() {
            *z = self.next_normal();
        }
    }
}

impl<N: NormalSource + ?Sized> NormalSource for &mut N {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        (**self).next_normal()
    }
}

/// Source returning the same value on every draw.
///
/// `ConstantNormal(0.0)` turns GBM into its deterministic drift-only path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantNormal(pub f64);

impl NormalSource for ConstantNormal {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.0
    }
}

/// Source replaying a fixed sequence of draws, cycling when exhausted.
///
/// An empty sequence yields 0.0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplayNormal {
    draws: Vec<f64>,
    cursor: usize,
}

impl ReplayNormal {
    /// Creates a source over `draws`.
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl NormalSource for ReplayNormal {
    fn next_normal(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let z = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        z
    }
}
