use chrono::{DateTime, Utc};
use coinlens_types::CoinlensError;

use crate::table::TimeSeriesTable;

/// Rows with `start <= timestamp <= end`, as a new table.
///
/// Either bound may be absent; with neither, the result is an unchanged copy.
/// `start > end` yields a zero-row table. Row order and column kinds are kept.
///
/// # Errors
/// Timestamp coercion failures when a bound is given.
pub fn trim_date_range(
    table: &TimeSeriesTable,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<TimeSeriesTable, CoinlensError> {
    if start.is_none() && end.is_none() {
        return Ok(table.clone());
    }
    let timestamps = table.timestamps()?;
    let keep: Vec<usize> = timestamps
        .iter()
        .enumerate()
        .filter(|(_, ts)| start.is_none_or(|s| **ts >= s) && end.is_none_or(|e| **ts <= e))
        .map(|(i, _)| i)
        .collect();
    Ok(table.take_rows(&keep))
}
