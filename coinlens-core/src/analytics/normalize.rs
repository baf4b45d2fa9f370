use coinlens_types::CoinlensError;

use super::validate::validate_numeric;
use crate::table::{Column, TimeSeriesTable};

/// Name of the normalized column for `column` and `base`.
///
/// The base is rounded to five decimals and always printed with a fractional
/// part (`100.0`, `1.23457`, `-50.0`).
#[must_use]
pub fn normalized_column(column: &str, base: f64) -> String {
    format!("normalized_{column}_base_{}", format_base(base))
}

/// Add `normalized_{column}_base_{base}` = `x[i] / x[0] * base`.
///
/// A missing first value yields an all-missing column. The base itself is
/// used unrounded.
///
/// # Errors
/// `ZeroBase` when the first value is zero; otherwise propagates
/// [`validate_numeric`] failures.
pub fn normalize_series(
    table: &mut TimeSeriesTable,
    column: &str,
    base: f64,
) -> Result<(), CoinlensError> {
    let values = validate_numeric(table, column)?;
    let first = values[0];
    if first == Some(0.0) {
        return Err(CoinlensError::zero_base(column));
    }
    let normalized: Vec<Option<f64>> = values
        .iter()
        .map(|&x| Some(x? / first? * base))
        .collect();
    table.insert_column(normalized_column(column, base), Column::Float(normalized))
}

fn format_base(base: f64) -> String {
    let rounded = (base * 1e5).round() / 1e5;
    let rounded = if rounded.is_finite() { rounded } else { base };
    if rounded.is_nan() {
        return "nan".to_string();
    }
    if rounded.is_infinite() {
        return if rounded > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = rounded.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return exponent_form(rounded);
    }
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}

// `1e-05` / `1.5e+16`: two-digit signed exponent.
fn exponent_form(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp
                .strip_prefix('-')
                .map_or(("+", exp), |rest| ("-", rest));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}
