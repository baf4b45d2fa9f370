//! coinlens-mock
//!
//! Deterministic connectors for tests and demos. [`MockConnector`] serves
//! static fixtures; [`DynamicMockConnector`] is driven per symbol from a test
//! through its [`DynamicMockController`].
use std::time::Duration;

use async_trait::async_trait;
use coinlens_core::connector::{CoinlensConnector, MarketChartProvider};
use coinlens_core::{CoinlensError, Currency, MarketChartData, Provider, Symbol};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::market_chart::{ETH_FIXTURE_PRICES, FIXTURE_MAX_DAYS, FIXTURE_START};

const CONNECTOR_NAME: &str = "coinlens-mock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Fixture,
    Fail,
    Latency(Duration),
}

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// - `BTC`: `days` daily points starting at [`FIXTURE_START`], priced `100 + 10 * i`.
/// - `ETH`: five daily points ([`ETH_FIXTURE_PRICES`]) regardless of `days`.
/// - `XRP`: an empty series.
#[derive(Debug, Clone, Copy)]
pub struct MockConnector {
    provider: Provider,
    mode: Mode,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Fixture-backed connector serving [`Provider::CoinGecko`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            provider: Provider::CoinGecko,
            mode: Mode::Fixture,
        }
    }

    /// Connector whose every market chart call fails with a connector error.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            provider: Provider::CoinGecko,
            mode: Mode::Fail,
        }
    }

    /// Fixture-backed connector that sleeps for `latency` before answering.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self {
            provider: Provider::CoinGecko,
            mode: Mode::Latency(latency),
        }
    }

    /// Serve a different provider (useful for routing tests).
    #[must_use]
    pub const fn for_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    async fn maybe_fail_or_sleep(&self, capability: &'static str) -> Result<(), CoinlensError> {
        match self.mode {
            Mode::Fixture => Ok(()),
            Mode::Fail => Err(CoinlensError::connector(
                CONNECTOR_NAME,
                format!("forced failure: {capability}"),
            )),
            Mode::Latency(latency) => {
                tokio::time::sleep(latency).await;
                Ok(())
            }
        }
    }
}

impl CoinlensConnector for MockConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn provider(&self) -> Provider {
        self.provider
    }

    fn as_market_chart_provider(&self) -> Option<&dyn MarketChartProvider> {
        Some(self as &dyn MarketChartProvider)
    }
}

#[async_trait]
impl MarketChartProvider for MockConnector {
    async fn market_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError> {
        self.maybe_fail_or_sleep("market-chart").await?;
        Ok(fixtures::market_chart::by_symbol(symbol, currency, days))
    }
}
