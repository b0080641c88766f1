//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing and stochastic price dynamics.
//!
//! This crate provides:
//! - Black-Scholes pricing and Greeks for European calls (`analytical`)
//! - Standard normal CDF/PDF (`analytical::distributions`)
//! - Geometric Brownian motion path generation with injectable randomness (`models`)
//!
//! ## Design Principles
//!
//! - **Immutable parameter structs**: a contract is a value, rebuilt whenever
//!   spot or time-to-expiry changes
//! - **Generic over `T: Float`** for the analytical formulas
//! - **Eager validation**: constructors reject out-of-domain inputs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
