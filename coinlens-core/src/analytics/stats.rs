use coinlens_types::CoinlensError;

use super::validate::validate_numeric;
use crate::report::StatsRecord;
use crate::table::TimeSeriesTable;

/// Summary statistics over `column`.
///
/// Missing values are skipped everywhere except `first_price`/`last_price`,
/// which read row 0 and the final row as-is (`NaN` when missing).
///
/// # Errors
/// Propagates [`validate_numeric`] failures.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "coinlens::analytics::calculate_stats",
        skip(table),
        fields(rows = table.row_count()),
        err,
    )
)]
pub fn calculate_stats(table: &TimeSeriesTable, column: &str) -> Result<StatsRecord, CoinlensError> {
    let values = validate_numeric(table, column)?;
    let present: Vec<f64> = values.iter().flatten().copied().collect();

    let first = values.first().copied().flatten().unwrap_or(f64::NAN);
    let last = values.last().copied().flatten().unwrap_or(f64::NAN);
    let variance = sample_variance(&present);

    Ok(StatsRecord {
        count: present.len(),
        min_price: present.iter().copied().fold(f64::INFINITY, f64::min),
        max_price: present.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean_price: mean(&present),
        median_price: median(&present),
        std_dev: variance.sqrt(),
        variance,
        first_price: first,
        last_price: last,
        percent_change: (last - first) / first * 100.0,
    })
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Variance with one delta degree of freedom; `NaN` below two observations.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_variance(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64
}

fn median(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return f64::NAN;
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
