//! Stochastic price dynamics.
//!
//! This module provides:
//! - `NormalSource`: injectable stream of standard normal draws
//! - `GbmParams` and `generate_gbm_path`: exact lognormal GBM paths
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::{generate_gbm_path, GbmParams, ReplayNormal};
//!
//! let params = GbmParams::new(100.0, 0.05, 0.2, 1.0).unwrap();
//! let mut source = ReplayNormal::new(vec![0.5, -1.0, 0.25]);
//! let path = generate_gbm_path(&params, 3, &mut source).unwrap();
//!
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.first(), 100.0);
//! ```

pub mod gbm;
pub mod stochastic;

pub use gbm::{generate_gbm_path, GbmParams};
pub use stochastic::{ConstantNormal, NormalSource, ReplayNormal};
