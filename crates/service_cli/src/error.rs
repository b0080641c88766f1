//! Error types for the hedge CLI.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid contract, series or simulation input
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Market data file could not be interpreted
    #[error("Market data error: {0}")]
    MarketData(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// CSV read or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a market data error
    pub fn market_data(msg: impl Into<String>) -> Self {
        Self::MarketData(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
