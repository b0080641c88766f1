//! Core simulation and error types.
//!
//! This module provides:
//! - `path`: Immutable spot price series (`PricePath`)
//! - `grid`: Evenly spaced time grid over the option horizon (`TimeGrid`)
//! - `error`: Structured error types shared across the workspace
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricePath`] from `path`
//! - [`TimeGrid`] from `grid`
//! - [`PricingError`] from `error`

pub mod error;
pub mod grid;
pub mod path;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use grid::TimeGrid;
pub use path::PricePath;
