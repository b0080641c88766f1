//! Console, CSV and JSON reporting of hedging results.

use pricer_pricing::hedging::{BatchSummary, ContractParams, SimulationTrace, TraceEntry};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::Result;

/// Headline result line.
pub fn final_pnl_line(final_pnl: f64) -> String {
    format!("Final P&L (Hedging Error): {:.4}", final_pnl)
}

/// Print the contract, a run summary and the headline P&L.
pub fn print_run_summary(mode: &str, contract: &ContractParams, trace: &SimulationTrace) {
    println!("\n┌──────────────────────┬──────────────────┐");
    println!("│ {:<20} │ {:>16} │", "Mode", mode);
    println!("├──────────────────────┼──────────────────┤");
    println!("│ {:<20} │ {:>16.4} │", "Initial spot", contract.spot());
    println!("│ {:<20} │ {:>16.4} │", "Strike", contract.strike());
    println!("│ {:<20} │ {:>16.4} │", "Expiry (years)", contract.expiry());
    println!("│ {:<20} │ {:>16.4} │", "Rate", contract.rate());
    println!("│ {:<20} │ {:>16.4} │", "Volatility", contract.volatility());
    println!("│ {:<20} │ {:>16} │", "Rebalancing steps", trace.n_steps());
    if let Some(seed) = trace.seed() {
        println!("│ {:<20} │ {:>16} │", "Seed", seed);
    }
    println!("├──────────────────────┼──────────────────┤");
    println!("│ {:<20} │ {:>16.4} │", "Premium", trace.premium());
    if let Some(terminal) = trace.terminal() {
        println!("│ {:<20} │ {:>16.4} │", "Final spot", terminal.spot);
        println!("│ {:<20} │ {:>16.4} │", "Payoff", terminal.option_value);
    }
    println!("└──────────────────────┴──────────────────┘");
    println!("{}", final_pnl_line(trace.final_pnl()));
}

/// Print the distribution of final P&L across a batch.
pub fn print_batch_summary(contract: &ContractParams, n_steps: usize, summary: &BatchSummary) {
    println!("\n┌──────────────────────┬──────────────────┐");
    println!("│ {:<20} │ {:>16} │", "Runs", summary.n_runs());
    println!("│ {:<20} │ {:>16} │", "Rebalancing steps", n_steps);
    println!("│ {:<20} │ {:>16} │", "Base seed", summary.base_seed);
    println!("│ {:<20} │ {:>16.4} │", "Premium", contract.premium());
    println!("├──────────────────────┼──────────────────┤");
    println!("│ {:<20} │ {:>16.4} │", "Mean final P&L", summary.mean);
    println!("│ {:<20} │ {:>16.4} │", "Std dev", summary.std_dev);
    println!("│ {:<20} │ {:>16.4} │", "Min", summary.min);
    println!("│ {:<20} │ {:>16.4} │", "Max", summary.max);
    println!("└──────────────────────┴──────────────────┘");
}

/// One CSV row: a trace entry plus a zero line for plotting the P&L against.
#[derive(Debug, Serialize)]
struct TraceRow {
    step: usize,
    time_left: f64,
    spot: f64,
    delta: f64,
    option_value: f64,
    cash: f64,
    stock_holding: f64,
    hedge_value: f64,
    pnl: f64,
    zero_line: f64,
}

impl From<&TraceEntry> for TraceRow {
    fn from(entry: &TraceEntry) -> Self {
        Self {
            step: entry.step,
            time_left: entry.time_left,
            spot: entry.spot,
            delta: entry.delta,
            option_value: entry.option_value,
            cash: entry.cash,
            stock_holding: entry.stock_holding,
            hedge_value: entry.hedge_value,
            pnl: entry.pnl,
            zero_line: 0.0,
        }
    }
}

/// Write the full trace as CSV, one row per entry.
pub fn write_trace_csv(path: &Path, trace: &SimulationTrace) -> Result<()> {
    let file = File::create(path)?;
    write_trace_csv_to(file, trace)?;
    info!(file = %path.display(), rows = trace.len(), "trace written");
    Ok(())
}

/// Write the trace as CSV to any writer.
pub fn write_trace_csv_to<W: Write>(writer: W, trace: &SimulationTrace) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in trace {
        csv_writer.serialize(TraceRow::from(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Complete result of one run, as written to JSON.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// `synthetic` or `backtest`
    pub mode: &'a str,
    /// Contract at inception
    pub contract: &'a ContractParams,
    /// Hedging error at expiry
    pub final_pnl: f64,
    /// Full trace
    pub trace: &'a SimulationTrace,
}

/// Write any serialisable report as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    info!(file = %path.display(), "JSON report written");
    Ok(())
}
