//! Column-oriented time-series table shared by every analytics stage.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use coinlens_types::{CoinlensError, MarketChartData, PricePoint};
use serde::{Deserialize, Serialize};

/// Name of the column holding observation instants.
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Default name of the subject numeric column.
pub const DEFAULT_PRICE_COLUMN: &str = "price";

/// Values of a single named column.
///
/// Float cells use `None` for missing values; a stored `NaN` is read back as
/// missing by [`Column::to_f64`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// UTC instants.
    Timestamp(Vec<DateTime<Utc>>),
    /// Real numbers.
    Float(Vec<Option<f64>>),
    /// Integers.
    Int(Vec<Option<i64>>),
    /// Free text (timestamp columns may arrive as ISO-8601 strings).
    Text(Vec<Option<String>>),
}

impl Column {
    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Timestamp(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// True when the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for float and integer columns.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_))
    }

    /// Numeric view of the column, or `None` if it is not numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Option<Vec<Option<f64>>> {
        match self {
            Self::Float(v) => Some(v.iter().map(|x| x.filter(|f| !f.is_nan())).collect()),
            Self::Int(v) => Some(v.iter().map(|x| x.map(|i| i as f64)).collect()),
            Self::Timestamp(_) | Self::Text(_) => None,
        }
    }

    /// Copy of the cells at `indices`, in that order.
    #[must_use]
    pub fn take(&self, indices: &[usize]) -> Self {
        match self {
            Self::Timestamp(v) => Self::Timestamp(indices.iter().map(|&i| v[i]).collect()),
            Self::Float(v) => Self::Float(indices.iter().map(|&i| v[i]).collect()),
            Self::Int(v) => Self::Int(indices.iter().map(|&i| v[i]).collect()),
            Self::Text(v) => Self::Text(indices.iter().map(|&i| v[i].clone()).collect()),
        }
    }

    /// JSON value of the cell at `row`; missing and non-finite numbers become `null`.
    #[must_use]
    pub fn json_value(&self, row: usize) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Self::Timestamp(v) => Value::String(v[row].to_rfc3339()),
            Self::Float(v) => v[row]
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
            Self::Int(v) => v[row].map_or(Value::Null, Value::from),
            Self::Text(v) => v[row].clone().map_or(Value::Null, Value::String),
        }
    }
}

/// Ordered collection of named, equal-length columns.
///
/// Column order is insertion order. Re-inserting an existing name replaces
/// its values in place and keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesTable {
    columns: Vec<(String, Column)>,
}

impl TimeSeriesTable {
    /// Build a table from named columns.
    ///
    /// # Errors
    /// Returns `InvalidArg` if column lengths differ or a name is repeated.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self, CoinlensError> {
        let mut table = Self::default();
        for (name, column) in columns {
            if table.has_column(&name) {
                return Err(CoinlensError::InvalidArg(format!(
                    "duplicate column '{name}'"
                )));
            }
            table.insert_column(name, column)?;
        }
        Ok(table)
    }

    /// Build a `timestamp`/`{price_key}` table from price points.
    ///
    /// An empty point list yields a zero-row table that still carries both columns.
    #[must_use]
    pub fn from_points(points: &[PricePoint], price_key: &str) -> Self {
        Self {
            columns: vec![
                (
                    TIMESTAMP_COLUMN.to_string(),
                    Column::Timestamp(points.iter().map(|p| p.timestamp).collect()),
                ),
                (
                    price_key.to_string(),
                    Column::Float(points.iter().map(|p| Some(p.price)).collect()),
                ),
            ],
        }
    }

    /// Build a table from a provider response.
    #[must_use]
    pub fn from_market_chart(data: &MarketChartData, price_key: &str) -> Self {
        Self::from_points(&data.points, price_key)
    }

    /// Number of rows (zero for a table without columns).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Column names in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Whether a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Borrow a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Iterate `(name, column)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Append a column, or replace the values of an existing one in place.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the column length differs from the row count
    /// of a non-empty schema.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), CoinlensError> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.row_count() {
            return Err(CoinlensError::InvalidArg(format!(
                "column '{name}' has {} rows, table has {}",
                column.len(),
                self.row_count()
            )));
        }
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = column;
        } else {
            self.columns.push((name, column));
        }
        Ok(())
    }

    /// Timestamp column coerced to UTC instants.
    ///
    /// Text cells are parsed as RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]`,
    /// `YYYY-MM-DD HH:MM:SS[.f]` or `YYYY-MM-DD`; integer cells are epoch
    /// milliseconds.
    ///
    /// # Errors
    /// `ColumnNotFound` when there is no `timestamp` column; `Data` for missing
    /// or unparsable cells and for float columns.
    pub fn timestamps(&self) -> Result<Vec<DateTime<Utc>>, CoinlensError> {
        let column = self
            .column(TIMESTAMP_COLUMN)
            .ok_or_else(|| CoinlensError::column_not_found(TIMESTAMP_COLUMN))?;
        match column {
            Column::Timestamp(v) => Ok(v.clone()),
            Column::Text(v) => v
                .iter()
                .enumerate()
                .map(|(row, cell)| {
                    cell.as_deref().and_then(parse_timestamp).ok_or_else(|| {
                        CoinlensError::Data(format!(
                            "unparsable timestamp at row {row}: {cell:?}"
                        ))
                    })
                })
                .collect(),
            Column::Int(v) => v
                .iter()
                .enumerate()
                .map(|(row, cell)| {
                    cell.and_then(DateTime::from_timestamp_millis).ok_or_else(|| {
                        CoinlensError::Data(format!("invalid epoch-ms timestamp at row {row}"))
                    })
                })
                .collect(),
            Column::Float(_) => Err(CoinlensError::Data(
                "timestamp column holds floats; expected instants, text or epoch ms".into(),
            )),
        }
    }

    /// Replace a textual or integer `timestamp` column with parsed instants.
    ///
    /// # Errors
    /// Propagates [`TimeSeriesTable::timestamps`] failures.
    pub fn coerce_timestamps(&mut self) -> Result<(), CoinlensError> {
        if matches!(self.column(TIMESTAMP_COLUMN), Some(Column::Timestamp(_))) {
            return Ok(());
        }
        let ts = self.timestamps()?;
        self.insert_column(TIMESTAMP_COLUMN, Column::Timestamp(ts))
    }

    /// New table holding only the named columns, in the given order.
    ///
    /// # Errors
    /// `ColumnNotFound` for an unknown name.
    pub fn select(&self, names: &[&str]) -> Result<Self, CoinlensError> {
        let columns = names
            .iter()
            .map(|&n| {
                self.column(n)
                    .map(|c| (n.to_string(), c.clone()))
                    .ok_or_else(|| CoinlensError::column_not_found(n))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(columns)
    }

    /// New table holding the rows at `indices`, in that order.
    #[must_use]
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), c.take(indices)))
                .collect(),
        }
    }
}

/// Convert raw `[epoch_ms, price]` pairs into price points.
///
/// # Errors
/// Returns `Data` when a timestamp is outside the representable range.
pub fn points_from_millis(pairs: &[(i64, f64)]) -> Result<Vec<PricePoint>, CoinlensError> {
    pairs
        .iter()
        .map(|&(ms, price)| {
            DateTime::from_timestamp_millis(ms)
                .map(|ts| PricePoint::new(ts, price))
                .ok_or_else(|| CoinlensError::Data(format!("timestamp out of range: {ms} ms")))
        })
        .collect()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
