//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing drives the discrete delta-hedging simulation:
//! - Seeded random number generation (`rng`)
//! - The rebalancing loop over historical or synthetic paths (`hedging`)
//! - Parallel Monte Carlo batches of independent runs (`hedging::batch`)
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricePath`, `TimeGrid`, `PricingError`, statistics
//! - Layer 2 (pricer_models): `EuropeanCall`, GBM paths, `NormalSource`
//!
//! The engine never prints. It emits `tracing` events at debug level per run
//! and at trace level per step; installing a subscriber is up to the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::PricePath;
//! use pricer_pricing::hedging::{run, Scenario, SimulationConfig};
//!
//! let closes = vec![100.0, 101.5, 99.8, 102.3, 103.1, 101.9];
//! let path = PricePath::historical(closes).unwrap();
//!
//! // Strike and spot default from the builder; spot is replaced by the first close
//! let config = SimulationConfig::builder()
//!     .scenario(Scenario::Historical(path))
//!     .build()
//!     .unwrap();
//!
//! let trace = run(&config).unwrap();
//! assert_eq!(trace.len(), 6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for traces, contracts and batch summaries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod hedging;
pub mod rng;
