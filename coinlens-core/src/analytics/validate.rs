use coinlens_types::CoinlensError;

use crate::table::TimeSeriesTable;

/// Check that `column` is a usable numeric series and return its values.
///
/// Checks run in this order: empty table, empty column name, column presence,
/// numeric kind, all-missing.
///
/// # Errors
/// `EmptyTable`, `InvalidArg`, `ColumnNotFound`, `NonNumericColumn` or
/// `AllMissing`, matching the first failed check.
pub fn validate_numeric(
    table: &TimeSeriesTable,
    column: &str,
) -> Result<Vec<Option<f64>>, CoinlensError> {
    if table.is_empty() {
        return Err(CoinlensError::EmptyTable);
    }
    if column.is_empty() {
        return Err(CoinlensError::InvalidArg(
            "column name must be a non-empty string (e.g. \"price\")".into(),
        ));
    }
    let values = table
        .column(column)
        .ok_or_else(|| CoinlensError::column_not_found(column))?
        .to_f64()
        .ok_or_else(|| CoinlensError::non_numeric(column))?;
    if values.iter().all(Option::is_none) {
        return Err(CoinlensError::all_missing(column));
    }
    Ok(values)
}
