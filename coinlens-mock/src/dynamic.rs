use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use coinlens_core::connector::{CoinlensConnector, MarketChartProvider};
use coinlens_core::{CoinlensError, Currency, MarketChartData, Provider, Symbol};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(CoinlensError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    chart_rules: HashMap<Symbol, MockBehavior<MarketChartData>>,
    chart_requests: Vec<(Symbol, Currency, u32)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `market_chart` calls for a specific symbol.
    pub async fn set_chart_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<MarketChartData>,
    ) {
        let mut guard = self.state.lock().await;
        guard.chart_rules.insert(symbol, behavior);
    }

    /// Return a copy of the `(symbol, currency, days)` request log.
    pub async fn chart_requests(&self) -> Vec<(Symbol, Currency, u32)> {
        let guard = self.state.lock().await;
        guard.chart_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.chart_rules.clear();
        guard.chart_requests.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    provider: Provider,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
        provider: Provider,
    ) -> (Arc<dyn CoinlensConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            provider,
            state,
        });
        (me as Arc<dyn CoinlensConnector>, controller)
    }
}

impl CoinlensConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn provider(&self) -> Provider {
        self.provider
    }

    fn as_market_chart_provider(&self) -> Option<&dyn MarketChartProvider> {
        Some(self as &dyn MarketChartProvider)
    }
}

#[async_trait]
impl MarketChartProvider for DynamicMockConnector {
    async fn market_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError> {
        // Snapshot the behavior without holding the lock across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.chart_requests.push((symbol, currency, days));
            guard.chart_rules.get(&symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(data)) => Ok(data),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(CoinlensError::unsupported("market-chart")),
        }
    }
}
