//! Response shapes handed to callers of the service layer.

use serde::{Deserialize, Serialize};

use crate::table::TimeSeriesTable;

/// Summary statistics of one numeric column.
///
/// Non-finite values (e.g. the standard deviation of a single observation)
/// serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Number of non-missing values.
    pub count: usize,
    /// Smallest non-missing value.
    pub min_price: f64,
    /// Largest non-missing value.
    pub max_price: f64,
    /// Arithmetic mean of non-missing values.
    pub mean_price: f64,
    /// Median of non-missing values.
    pub median_price: f64,
    /// Sample standard deviation (n − 1).
    pub std_dev: f64,
    /// Sample variance (n − 1).
    pub variance: f64,
    /// Value at row 0.
    pub first_price: f64,
    /// Value at the final row.
    pub last_price: f64,
    /// `(last − first) / first × 100`.
    pub percent_change: f64,
}

/// Row-major, JSON-ready view of a [`TimeSeriesTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResponse {
    /// Column names, in table order.
    pub columns: Vec<String>,
    /// One array per row, aligned with `columns`.
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl From<&TimeSeriesTable> for TableResponse {
    fn from(table: &TimeSeriesTable) -> Self {
        let columns: Vec<String> = table.column_names().into_iter().map(String::from).collect();
        let rows = (0..table.row_count())
            .map(|row| table.iter().map(|(_, c)| c.json_value(row)).collect())
            .collect();
        Self { columns, rows }
    }
}
