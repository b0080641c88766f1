//! Historical close-price loading from CSV.
//!
//! The file needs a header row with a close-price column (matched
//! case-insensitively). An optional `date` column is parsed as `YYYY-MM-DD`
//! and must be strictly increasing.

use chrono::NaiveDate;
use pricer_core::types::PricePath;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// Name of the optional date column.
const DATE_COLUMN: &str = "date";

/// Closing prices of one instrument, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    /// Validated price path (at least two positive closes)
    pub path: PricePath,
    /// Observation dates, when the file carries a date column
    pub dates: Option<Vec<NaiveDate>>,
}

impl MarketSeries {
    /// First and last observation dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.dates.as_ref()?;
        Some((*dates.first()?, *dates.last()?))
    }
}

/// Load closes from `path`, reading the column named `column`.
pub fn load_closes(path: &Path, column: &str) -> Result<MarketSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let series = read_closes(reader, column)?;
    debug!(
        file = %path.display(),
        n_points = series.path.len(),
        "loaded market data"
    );
    Ok(series)
}

/// Parse closes from any CSV reader.
pub fn read_closes<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    column: &str,
) -> Result<MarketSeries> {
    let headers = reader.headers()?.clone();
    let find = |name: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    };

    let close_index = find(column).ok_or_else(|| {
        CliError::market_data(format!(
            "missing '{}' column (found: {})",
            column,
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
    })?;
    let date_index = find(DATE_COLUMN);

    let mut closes = Vec::new();
    let mut dates = date_index.map(|_| Vec::new());

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Row 1 is the header
        let line = row + 2;

        let raw = record.get(close_index).unwrap_or_default();
        let close: f64 = raw.parse().map_err(|_| {
            CliError::market_data(format!("line {}: invalid close price '{}'", line, raw))
        })?;
        closes.push(close);

        if let (Some(index), Some(dates)) = (date_index, dates.as_mut()) {
            let raw = record.get(index).unwrap_or_default();
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                CliError::market_data(format!("line {}: invalid date '{}'", line, raw))
            })?;
            if let Some(previous) = dates.last() {
                if date <= *previous {
                    return Err(CliError::market_data(format!(
                        "line {}: date {} is not after {}",
                        line, date, previous
                    )));
                }
            }
            dates.push(date);
        }
    }

    let path = PricePath::historical(closes)?;
    Ok(MarketSeries { path, dates })
}
