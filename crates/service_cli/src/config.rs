//! Hedge CLI configuration management
//!
//! Resolves run parameters from, highest precedence first: command-line flags,
//! `HEDGE_*` environment variables (read by clap), a TOML file, and built-in
//! defaults.

use pricer_core::types::PricingError;
use pricer_pricing::hedging::{
    ContractParams, DEFAULT_EXPIRY, DEFAULT_RATE, DEFAULT_SPOT, DEFAULT_STEPS, DEFAULT_STRIKE,
    DEFAULT_VOLATILITY, MAX_RUNS, MAX_STEPS,
};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default number of runs in a Monte Carlo batch.
pub const DEFAULT_RUNS: usize = 1_000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Value outside its domain
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// Constraint that was violated
        reason: String,
    },

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-step events
    Trace,
    /// Per-run events
    Debug,
    /// Progress and results
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Resolved run parameters.
///
/// `strike`, `volatility` and `n_steps` stay optional because a backtest
/// derives them from the price series when unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HedgeConfig {
    /// Initial spot for synthetic paths
    pub spot: f64,
    /// Strike (backtest default: first close)
    pub strike: Option<f64>,
    /// Time to expiry in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility (backtest default: realised volatility)
    pub volatility: Option<f64>,
    /// Rebalancing steps (backtest default: number of closes minus one)
    pub n_steps: Option<usize>,
    /// Seed for synthetic paths; unset draws from entropy
    pub seed: Option<u64>,
    /// Runs per Monte Carlo batch
    pub runs: usize,
    /// Log verbosity
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            spot: DEFAULT_SPOT,
            strike: None,
            expiry: DEFAULT_EXPIRY,
            rate: DEFAULT_RATE,
            volatility: None,
            n_steps: None,
            seed: None,
            runs: DEFAULT_RUNS,
            log_level: LogLevel::Info,
        }
    }
}

impl HedgeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: HedgeConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the settings that are not checked by the pricing layer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spot", Some(self.spot)),
            ("strike", self.strike),
            ("expiry", Some(self.expiry)),
            ("rate", Some(self.rate)),
            ("volatility", self.volatility),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ConfigError::InvalidValue {
                        name,
                        reason: format!("{} is not a finite number", value),
                    });
                }
            }
        }

        if let Some(n_steps) = self.n_steps {
            if n_steps > MAX_STEPS {
                return Err(ConfigError::InvalidValue {
                    name: "n_steps",
                    reason: format!("{} exceeds the maximum of {}", n_steps, MAX_STEPS),
                });
            }
        }

        if self.runs == 0 || self.runs > MAX_RUNS {
            return Err(ConfigError::InvalidValue {
                name: "runs",
                reason: format!("{} is outside [1, {}]", self.runs, MAX_RUNS),
            });
        }

        Ok(())
    }

    /// Apply command-line (and environment) overrides.
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(spot) = cli.spot {
            self.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.strike = Some(strike);
        }
        if let Some(expiry) = cli.expiry {
            self.expiry = expiry;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(volatility) = cli.volatility {
            self.volatility = Some(volatility);
        }
        if let Some(n_steps) = cli.n_steps {
            self.n_steps = Some(n_steps);
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(runs) = cli.runs {
            self.runs = runs;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Contract for a synthetic run, filling unset values with defaults.
    pub fn synthetic_contract(&self) -> Result<ContractParams, PricingError> {
        ContractParams::new(
            self.spot,
            self.strike.unwrap_or(DEFAULT_STRIKE),
            self.expiry,
            self.rate,
            self.volatility.unwrap_or(DEFAULT_VOLATILITY),
        )
    }

    /// Rebalancing steps for a synthetic run.
    pub fn synthetic_steps(&self) -> usize {
        self.n_steps.unwrap_or(DEFAULT_STEPS)
    }
}

/// Overrides collected from the command line and `HEDGE_*` variables.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--spot` / `HEDGE_SPOT`
    pub spot: Option<f64>,
    /// `--strike` / `HEDGE_STRIKE`
    pub strike: Option<f64>,
    /// `--expiry` / `HEDGE_EXPIRY`
    pub expiry: Option<f64>,
    /// `--rate` / `HEDGE_RATE`
    pub rate: Option<f64>,
    /// `--volatility` / `HEDGE_VOLATILITY`
    pub volatility: Option<f64>,
    /// `--steps` / `HEDGE_STEPS`
    pub n_steps: Option<usize>,
    /// `--seed` / `HEDGE_SEED`
    pub seed: Option<u64>,
    /// `--runs` / `HEDGE_RUNS`
    pub runs: Option<usize>,
    /// `--log-level` / `HEDGE_LOG_LEVEL`
    pub log_level: Option<String>,
}

/// Build the final configuration from an optional file and CLI overrides.
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<HedgeConfig, ConfigError> {
    // Start with defaults or file config
    let mut config = match config_file {
        Some(path) => HedgeConfig::from_file(path)?,
        None => HedgeConfig::default(),
    };

    // Override with CLI arguments (clap already folded in the environment)
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
