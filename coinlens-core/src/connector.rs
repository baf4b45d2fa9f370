use async_trait::async_trait;

pub use coinlens_types::ConnectorKey;
use coinlens_types::{CoinlensError, Currency, MarketChartData, Provider, Symbol};

/// Focused role trait for connectors that provide historical price series.
#[async_trait]
pub trait MarketChartProvider: Send + Sync {
    /// Fetch `days` days of prices for `symbol` quoted in `currency`.
    ///
    /// Points are returned ascending by timestamp. An empty series is a valid
    /// response; the service layer decides whether that is an error.
    async fn market_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError>;
}

/// Main connector trait implemented by upstream market-data adapters.
///
/// A connector serves exactly one [`Provider`] and advertises capabilities by
/// returning trait object references from the `as_*_provider` methods.
pub trait CoinlensConnector: Send + Sync {
    /// A stable identifier (e.g. "coinlens-coingecko").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// The upstream provider this connector talks to.
    fn provider(&self) -> Provider;

    /// Whether the connector can serve `symbol` quoted in `currency`.
    ///
    /// Default: every combination. Connectors backed by an id mapping should
    /// override this.
    fn supports(&self, symbol: Symbol, currency: Currency) -> bool {
        let _ = (symbol, currency);
        true
    }

    /// Advertise market chart capability when supported.
    fn as_market_chart_provider(&self) -> Option<&dyn MarketChartProvider> {
        None
    }
}
