//! Mathematical utilities.
//!
//! This module provides:
//! - `statistics`: Sample moments, log returns and realised volatility

pub mod statistics;
