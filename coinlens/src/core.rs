use std::sync::Arc;
use std::time::Duration;

use coinlens_core::{CoinlensConfig, CoinlensConnector, CoinlensError, Provider, TIMESTAMP_COLUMN};

/// Service façade that routes market chart requests to connectors and runs
/// the analytics pipeline over the results.
pub struct Coinlens {
    pub(crate) connectors: Vec<Arc<dyn CoinlensConnector>>,
    pub(crate) cfg: CoinlensConfig,
}

/// Builder for constructing a `Coinlens` service with custom configuration.
pub struct CoinlensBuilder {
    connectors: Vec<Arc<dyn CoinlensConnector>>,
    cfg: CoinlensConfig,
}

impl Default for CoinlensBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinlensBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: CoinlensConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Requests are routed by [`CoinlensConnector::provider`]; when two
    /// connectors serve the same provider the first registered one wins.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn CoinlensConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CoinlensConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider call timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for each use case (fetch plus compute).
    ///
    /// When exceeded, the use case returns a `RequestTimeout` error.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Name of the price column in tables built from fetched series.
    #[must_use]
    pub fn price_key(mut self, key: impl Into<String>) -> Self {
        self.cfg.price_key = key.into();
        self
    }

    /// Build the `Coinlens` service.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered or the price
    /// key is empty or collides with the timestamp column.
    pub fn build(self) -> Result<Coinlens, CoinlensError> {
        if self.connectors.is_empty() {
            return Err(CoinlensError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let key = self.cfg.price_key.trim();
        if key.is_empty() || key == TIMESTAMP_COLUMN {
            return Err(CoinlensError::InvalidArg(format!(
                "price_key must be a non-empty name other than '{TIMESTAMP_COLUMN}', got '{}'",
                self.cfg.price_key
            )));
        }
        Ok(Coinlens {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Coinlens {
    /// Start building a new `Coinlens` instance.
    #[must_use]
    pub fn builder() -> CoinlensBuilder {
        CoinlensBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CoinlensConfig {
        &self.cfg
    }

    /// The first registered connector serving `provider`.
    #[must_use]
    pub fn connector_for(&self, provider: Provider) -> Option<Arc<dyn CoinlensConnector>> {
        self.connectors
            .iter()
            .find(|c| c.provider() == provider)
            .cloned()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CoinlensError>
    where
        Fut: core::future::Future<Output = Result<T, CoinlensError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CoinlensError::provider_timeout(connector_name, capability)))
    }

    /// Apply the configured request deadline, if any, to a whole use case.
    pub(crate) async fn with_request_deadline<T, Fut>(
        &self,
        capability: &'static str,
        fut: Fut,
    ) -> Result<T, CoinlensError>
    where
        Fut: core::future::Future<Output = Result<T, CoinlensError>>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => (tokio::time::timeout(deadline, fut).await)
                .unwrap_or_else(|_| Err(CoinlensError::request_timeout(capability))),
            None => fut.await,
        }
    }
}
