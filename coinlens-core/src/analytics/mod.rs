//! Pure transformations over a [`TimeSeriesTable`](crate::table::TimeSeriesTable).
//!
//! Engines that add columns take `&mut TimeSeriesTable` and keep row count and
//! order; the resampler and trimmer return new tables. Every engine validates
//! its subject column first.

/// Enrichment orchestrator.
pub mod enrich;
/// Normalization engine.
pub mod normalize;
/// Calendar resampling.
pub mod resample;
/// Percent-change columns.
pub mod returns;
/// Rolling mean.
pub mod rolling;
/// Summary statistics.
pub mod stats;
/// Inclusive date-range filter.
pub mod trim;
/// Subject column checks.
pub mod validate;
/// Rolling volatility of fractional changes.
pub mod volatility;

pub use enrich::enrich;
pub use normalize::{normalize_series, normalized_column};
pub use resample::{WEEK_NUMBER_COLUMN, resample_price_series};
pub use returns::{ACUM_PCT_CHANGE_COLUMN, PCT_CHANGE_COLUMN, compute_returns};
pub use rolling::{compute_rolling_mean, rolling_mean_column};
pub use stats::calculate_stats;
pub use trim::trim_date_range;
pub use validate::validate_numeric;
pub use volatility::{compute_volatility, volatility_column};
