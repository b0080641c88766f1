//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod backtest;
pub mod batch;
pub mod synthetic;

use std::path::PathBuf;

/// Optional report files shared by the single-run commands.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Write the full trace as CSV
    pub trace_csv: Option<PathBuf>,
    /// Write the run report as JSON
    pub json: Option<PathBuf>,
}
