use coinlens_types::CoinlensError;

use super::returns::padded_changes;
use super::rolling::rolling_apply;
use super::stats::sample_variance;
use super::validate::validate_numeric;
use crate::table::{Column, TimeSeriesTable};

/// Name of the volatility column for `window`.
#[must_use]
pub fn volatility_column(window: usize) -> String {
    format!("volatility_{window}")
}

/// Add `volatility_{window}`: the rolling sample standard deviation of the
/// fractional changes `x[i] / x[i-1] - 1` over `window` consecutive changes.
/// Missing cells carry the last present value forward before differencing.
///
/// Row 0 has no change, so the first `window` rows are missing. A window
/// longer than the available changes yields an all-missing column.
///
/// # Errors
/// `InvalidArg` when `window <= 1`; otherwise propagates
/// [`validate_numeric`] failures.
pub fn compute_volatility(
    table: &mut TimeSeriesTable,
    column: &str,
    window: usize,
) -> Result<(), CoinlensError> {
    let values = validate_numeric(table, column)?;
    if window <= 1 {
        return Err(CoinlensError::InvalidArg(format!(
            "volatility window must be greater than 1, got {window}"
        )));
    }

    let changes = padded_changes(&values);
    let vol = rolling_apply(&changes, window, |xs| sample_variance(xs).sqrt());
    table.insert_column(volatility_column(window), Column::Float(vol))
}
