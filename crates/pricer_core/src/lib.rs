//! # pricer_core: Foundation Layer for the Delta-Hedging Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Price series and time discretisation (`types::path`, `types::grid`)
//! - Error types shared by every layer (`types::error`)
//! - Sample statistics and realised volatility (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::statistics::realised_volatility;
//! use pricer_core::types::{PricePath, TimeGrid};
//!
//! let path = PricePath::new(vec![100.0, 101.0, 99.5, 100.5]).unwrap();
//! assert_eq!(path.n_steps(), 3);
//!
//! let grid = TimeGrid::new(1.0, path.n_steps()).unwrap();
//! assert_eq!(grid.len(), path.len());
//!
//! let sigma = realised_volatility(path.as_slice()).unwrap();
//! assert!(sigma > 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PricePath` and `TimeGrid`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
