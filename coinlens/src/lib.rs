//! Coinlens fetches crypto price series and turns them into analytics.
//!
//! Overview
//! - Routes each request to the connector registered for its [`Provider`].
//! - Bounds every provider call with a per-provider timeout and, optionally,
//!   each whole use case with a request deadline.
//! - Runs the synchronous enrichment pipeline from `coinlens_core` on the
//!   fetched series and returns tables, statistics or plot requests.
//!
//! Error behavior
//! - Fetch failures (`Unsupported`, `InvalidArg`, `Connector`,
//!   `ProviderTimeout`, `Data`, `NotFound`) surface unchanged.
//! - Failures inside the pipeline surface as a single `Computation` error.
//!
//! Building a service and computing statistics:
//! ```rust,ignore
//! use std::sync::Arc;
//! use coinlens::{Coinlens, Currency, MarketChartRequest, Symbol};
//! use coinlens_coingecko::CoinGeckoConnector;
//!
//! let cg = Arc::new(CoinGeckoConnector::new_default()?);
//! let lens = Coinlens::builder()
//!     .with_connector(cg)
//!     .provider_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let stats = lens.stats(&MarketChartRequest::new(Symbol::Btc, Currency::Usd, 30)).await?;
//! println!("mean={} change={}%", stats.mean_price, stats.percent_change);
//! ```
//!
//! Enriching a weekly series:
//! ```rust,ignore
//! use coinlens::{EnrichOptions, Frequency};
//!
//! let options = EnrichOptions::new()
//!     .frequency(Frequency::Weekly)
//!     .window_size(4)
//!     .normalize_base(100.0);
//! let table = lens.enriched_table(&req, &options).await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Coinlens, CoinlensBuilder};

// Re-export core types for convenience
pub use coinlens_core::{
    ChartRenderer, CoinlensConfig, CoinlensConnector, CoinlensError, Column, Currency,
    EnrichOptions, ErrorKind, Frequency, MarketChartData, MarketChartProvider, MarketChartRequest,
    PlotRequest, PricePoint, Provider, StatsRecord, Symbol, TableResponse, TimeSeriesTable,
    renderer_fn,
};
