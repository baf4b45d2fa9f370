use coinlens_types::{CoinlensError, EnrichOptions};

use super::normalize::normalize_series;
use super::resample::resample_price_series;
use super::returns::compute_returns;
use super::rolling::compute_rolling_mean;
use super::trim::trim_date_range;
use super::volatility::compute_volatility;
use crate::table::TimeSeriesTable;

/// Run the enrichment pipeline over an owned table.
///
/// Stages run in a fixed order: trim, resample (if `frequency`), returns,
/// rolling mean (if `window_size`), volatility (if `volatility_window`),
/// normalization (if `normalize_base`).
///
/// # Errors
/// Any stage failure, including invalid window sizes, is returned as a single
/// `Computation` error carrying the stage's message.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "coinlens::analytics::enrich",
        skip(table, options),
        fields(rows = table.row_count()),
        err,
    )
)]
pub fn enrich(
    table: TimeSeriesTable,
    column: &str,
    options: &EnrichOptions,
) -> Result<TimeSeriesTable, CoinlensError> {
    run_stages(table, column, options).map_err(CoinlensError::computation)
}

fn run_stages(
    table: TimeSeriesTable,
    column: &str,
    options: &EnrichOptions,
) -> Result<TimeSeriesTable, CoinlensError> {
    let mut table = trim_date_range(&table, options.start, options.end)?;

    if let Some(frequency) = options.frequency {
        table = resample_price_series(&table, column, frequency)?;
    }

    compute_returns(&mut table, column)?;

    if let Some(window) = options.window_size {
        let window = positive_window("window_size", window, 1)?;
        compute_rolling_mean(&mut table, window, column)?;
    }

    if let Some(window) = options.volatility_window {
        let window = positive_window("volatility_window", window, 2)?;
        compute_volatility(&mut table, column, window)?;
    }

    if let Some(base) = options.normalize_base {
        normalize_series(&mut table, column, base)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_names().len(),
        "enrichment complete"
    );

    Ok(table)
}

fn positive_window(name: &str, value: i64, min: i64) -> Result<usize, CoinlensError> {
    if value < min {
        return Err(CoinlensError::InvalidArg(format!(
            "{name} must be at least {min}, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| CoinlensError::InvalidArg(format!("{name} {value} is out of range")))
}
