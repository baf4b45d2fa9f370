use std::sync::Arc;
use std::time::Duration;

use coinlens_core::CoinlensError;

use crate::CoinGeckoConnector;
use crate::adapter::{COINGECKO_API_BASE, COINGECKO_PRO_API_BASE, RealAdapter};

/// Builder for [`CoinGeckoConnector`].
///
/// Defaults: public API base URL, no API key, 5 second HTTP timeout. Setting
/// an API key switches the base URL to the pro endpoint unless a base URL was
/// set explicitly.
#[derive(Debug, Clone)]
pub struct CoinGeckoBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for CoinGeckoBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(5),
        }
    }
}

impl CoinGeckoBuilder {
    /// Override the API base URL (e.g. a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use a pro-tier API key, sent as `x_cg_pro_api_key`.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// HTTP timeout for each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<CoinGeckoConnector, CoinlensError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            if self.api_key.is_some() {
                COINGECKO_PRO_API_BASE.to_string()
            } else {
                COINGECKO_API_BASE.to_string()
            }
        });
        let adapter = RealAdapter::new(base_url, self.api_key, self.timeout)?;
        Ok(CoinGeckoConnector::from_adapter(Arc::new(adapter)))
    }
}
