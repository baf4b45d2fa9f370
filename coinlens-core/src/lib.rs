//! coinlens-core
//!
//! Core types, traits, and the analytics pipeline shared across the coinlens
//! workspace.
//!
//! - `table`: the column-oriented [`TimeSeriesTable`] and its entry adapters.
//! - `analytics`: validation, statistics, returns, rolling mean, volatility,
//!   normalization, resampling, trimming and the enrichment orchestrator.
//! - `connector`: the `CoinlensConnector` trait and capability provider traits.
//! - `report` / `plot`: response shapes and rendering requests.
//!
//! The pipeline is synchronous and I/O-free; only the connector traits are
//! async.
#![warn(missing_docs)]

pub mod analytics;
/// Connector capability traits and the primary `CoinlensConnector` interface.
pub mod connector;
pub mod plot;
pub mod report;
pub mod table;

pub use analytics::{
    calculate_stats, compute_returns, compute_rolling_mean, compute_volatility, enrich,
    normalize_series, resample_price_series, trim_date_range, validate_numeric,
};
pub use coinlens_types::*;
pub use connector::{CoinlensConnector, MarketChartProvider};
pub use plot::{ChartRenderer, PlotRequest, renderer_fn};
pub use report::{StatsRecord, TableResponse};
pub use table::{Column, DEFAULT_PRICE_COLUMN, TIMESTAMP_COLUMN, TimeSeriesTable, points_from_millis};
