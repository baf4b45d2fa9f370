use coinlens_types::CoinlensError;

use super::stats::mean;
use super::validate::validate_numeric;
use crate::table::{Column, TimeSeriesTable};

/// Name of the rolling mean column for `window`.
#[must_use]
pub fn rolling_mean_column(window: usize) -> String {
    format!("rolling_mean_{window}")
}

/// Add `rolling_mean_{window}`: the mean of the trailing `window` values.
///
/// The first `window - 1` rows, and any window containing a missing value,
/// are missing.
///
/// # Errors
/// `InvalidArg` when `window` is zero or exceeds the row count; otherwise
/// propagates [`validate_numeric`] failures.
pub fn compute_rolling_mean(
    table: &mut TimeSeriesTable,
    window: usize,
    column: &str,
) -> Result<(), CoinlensError> {
    let values = validate_numeric(table, column)?;
    if window == 0 {
        return Err(CoinlensError::InvalidArg(
            "window_size must be a positive integer".into(),
        ));
    }
    if window > values.len() {
        return Err(CoinlensError::InvalidArg(format!(
            "window_size {window} cannot be larger than the number of rows ({})",
            values.len()
        )));
    }
    let rolled = rolling_apply(&values, window, mean);
    table.insert_column(rolling_mean_column(window), Column::Float(rolled))
}

/// Apply `f` to every complete trailing window of `window` present values.
///
/// Rows before the first complete window, and windows with a missing value,
/// yield `None`. A window longer than the series yields all `None`.
pub(crate) fn rolling_apply<F>(values: &[Option<f64>], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let mut buf = Vec::with_capacity(window);
    (0..values.len())
        .map(|end| {
            let start = (end + 1).checked_sub(window)?;
            buf.clear();
            for v in &values[start..=end] {
                buf.push((*v)?);
            }
            Some(f(&buf))
        })
        .collect()
}
