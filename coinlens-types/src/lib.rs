//! Coinlens-specific data transfer objects, configuration primitives, and the
//! unified error type shared by every crate in the workspace.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod market;
mod options;

pub use config::CoinlensConfig;
pub use connector::ConnectorKey;
pub use error::{CoinlensError, ErrorKind};
pub use market::{Currency, MarketChartData, MarketChartRequest, PricePoint, Provider, Symbol};
pub use options::{EnrichOptions, Frequency};
