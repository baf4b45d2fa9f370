//! coinlens-coingecko
//!
//! Public connector that implements `CoinlensConnector` on top of the CoinGecko
//! `/coins/{id}/market_chart` endpoint.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
/// Symbol and currency id mapping per provider.
pub mod mapper;

use std::sync::Arc;

use adapter::CgMarketChart;
use async_trait::async_trait;
use coinlens_core::{
    CoinlensError, Currency, MarketChartData, PricePoint, Provider, Symbol,
    connector::{CoinlensConnector, ConnectorKey, MarketChartProvider},
    points_from_millis,
};

pub use adapter::{COINGECKO_API_BASE, COINGECKO_PRO_API_BASE, RealAdapter};
pub use builder::CoinGeckoBuilder;
pub use mapper::{map_provider_currency_id, map_provider_symbol_id};

pub(crate) const CONNECTOR_NAME: &str = "coinlens-coingecko";

/// Public connector type. Production users construct it with
/// [`CoinGeckoConnector::new_default`] or [`CoinGeckoConnector::builder`].
pub struct CoinGeckoConnector {
    market_chart: Arc<dyn CgMarketChart>,
}

impl CoinGeckoConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new(CONNECTOR_NAME);

    /// Connector against the public API with the default HTTP timeout.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, CoinlensError> {
        Self::builder().build()
    }

    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> CoinGeckoBuilder {
        CoinGeckoBuilder::default()
    }

    /// For tests/injection: build from any market chart adapter.
    #[must_use]
    pub fn from_adapter(market_chart: Arc<dyn CgMarketChart>) -> Self {
        Self { market_chart }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::coingecko::market_chart",
            skip(self),
            fields(symbol = %symbol, currency = %currency, days = days),
            err,
        )
    )]
    async fn fetch_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError> {
        let coin_id = map_provider_symbol_id(symbol, Provider::CoinGecko)?;
        let vs_currency = map_provider_currency_id(currency, Provider::CoinGecko)?;
        let raw = self
            .market_chart
            .fetch_market_chart(coin_id, vs_currency, days)
            .await?;
        let points = parse_market_chart(&raw)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(points = points.len(), "parsed market chart");
        Ok(MarketChartData {
            symbol,
            currency,
            points,
        })
    }
}

/// Parse the `prices` array of a market chart payload.
///
/// Each item is `[epoch_ms, price]`; other keys (`market_caps`,
/// `total_volumes`) are ignored.
///
/// # Errors
/// `Data` when `prices` is missing or not an array, or an item is malformed.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_market_chart(raw: &serde_json::Value) -> Result<Vec<PricePoint>, CoinlensError> {
    let prices = raw
        .get("prices")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| CoinlensError::Data("missing 'prices' in CoinGecko response".into()))?;

    let pairs = prices
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let pair = item.as_array().filter(|a| a.len() >= 2);
            let ms = pair.and_then(|a| a[0].as_f64());
            let price = pair.and_then(|a| a[1].as_f64());
            match (ms, price) {
                (Some(ms), Some(price)) if ms.is_finite() => Ok((ms as i64, price)),
                _ => Err(CoinlensError::Data(format!(
                    "malformed price item at index {i}: {item}"
                ))),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    points_from_millis(&pairs)
}

impl CoinlensConnector for CoinGeckoConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "CoinGecko"
    }

    fn provider(&self) -> Provider {
        Provider::CoinGecko
    }

    fn supports(&self, symbol: Symbol, currency: Currency) -> bool {
        map_provider_symbol_id(symbol, Provider::CoinGecko).is_ok()
            && map_provider_currency_id(currency, Provider::CoinGecko).is_ok()
    }

    fn as_market_chart_provider(&self) -> Option<&dyn MarketChartProvider> {
        Some(self as &dyn MarketChartProvider)
    }
}

#[async_trait]
impl MarketChartProvider for CoinGeckoConnector {
    async fn market_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError> {
        self.fetch_chart(symbol, currency, days).await
    }
}
