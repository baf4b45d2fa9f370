use coinlens_types::CoinlensError;

use super::validate::validate_numeric;
use crate::table::{Column, TimeSeriesTable};

/// Column holding the row-over-row percent change.
pub const PCT_CHANGE_COLUMN: &str = "pct_change";
/// Column holding the percent change relative to row 0.
pub const ACUM_PCT_CHANGE_COLUMN: &str = "acum_pct_change";

/// Add `pct_change` and `acum_pct_change` to `table`.
///
/// `pct_change` is missing at row 0 and compares each row with the last
/// present value before it, treating a missing cell as that value carried
/// forward (`[1, _, 2, 4]` gives `[_, 0, 100, 100]`). Rows before the first
/// present value stay missing. `acum_pct_change` is 0 at row 0 and missing
/// wherever the row or row 0 is missing. A zero denominator follows IEEE
/// division.
///
/// # Errors
/// Propagates [`validate_numeric`] failures.
pub fn compute_returns(table: &mut TimeSeriesTable, column: &str) -> Result<(), CoinlensError> {
    let values = validate_numeric(table, column)?;

    let pct: Vec<Option<f64>> = padded_changes(&values)
        .into_iter()
        .map(|c| c.map(|c| c * 100.0))
        .collect();

    let base = values[0];
    let acum: Vec<Option<f64>> = values
        .iter()
        .map(|&cur| Some((cur? - base?) / base? * 100.0))
        .collect();

    table.insert_column(PCT_CHANGE_COLUMN, Column::Float(pct))?;
    table.insert_column(ACUM_PCT_CHANGE_COLUMN, Column::Float(acum))
}

/// Fractional changes `x[i] / x[i-1] - 1` over the forward-filled series.
pub(crate) fn padded_changes(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut last: Option<f64> = None;
    values
        .iter()
        .map(|&v| {
            let prev = last;
            if v.is_some() {
                last = v;
            }
            Some(last? / prev? - 1.0)
        })
        .collect()
}
