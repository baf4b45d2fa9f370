use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use coinlens_types::CoinlensError;

use crate::CONNECTOR_NAME;

/// Public CoinGecko API base URL.
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";
/// Pro-tier CoinGecko API base URL.
pub const COINGECKO_PRO_API_BASE: &str = "https://pro-api.coingecko.com/api/v3";

const CAPABILITY: &str = "market-chart";
const BODY_EXCERPT_CHARS: usize = 200;

/// Market chart transport abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait CgMarketChart: Send + Sync {
    /// GET `/coins/{coin_id}/market_chart` and return the decoded JSON payload.
    async fn fetch_market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<serde_json::Value, CoinlensError>;
}

/// Production adapter backed by `reqwest`.
///
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RealAdapter {
    /// Build an adapter with its own HTTP client.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, CoinlensError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoinlensError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(http, base_url, api_key))
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn market_chart_url(&self, coin_id: &str) -> String {
        format!("{}/coins/{coin_id}/market_chart", self.base_url)
    }
}

fn map_reqwest_err(e: &reqwest::Error, url: &str) -> CoinlensError {
    if e.is_timeout() {
        CoinlensError::provider_timeout(CONNECTOR_NAME, CAPABILITY)
    } else {
        CoinlensError::connector(
            CONNECTOR_NAME,
            format!("network error while requesting {url}: {e}"),
        )
    }
}

#[async_trait]
impl CgMarketChart for RealAdapter {
    async fn fetch_market_chart(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<serde_json::Value, CoinlensError> {
        let url = self.market_chart_url(coin_id);
        let mut req = self
            .http
            .get(&url)
            .query(&[("vs_currency", vs_currency.to_string()), ("days", days.to_string())]);
        if let Some(key) = &self.api_key {
            req = req.query(&[("x_cg_pro_api_key", key.as_str())]);
        }

        let resp = req.send().await.map_err(|e| map_reqwest_err(&e, &url))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| map_reqwest_err(&e, &url))?;

        if !status.is_success() {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            return Err(CoinlensError::connector(
                CONNECTOR_NAME,
                format!(
                    "CoinGecko API error {} for URL: {url}; response body: {excerpt}",
                    status.as_u16()
                ),
            ));
        }

        serde_json::from_str(&body)
            .map_err(|e| CoinlensError::Data(format!("malformed JSON from CoinGecko: {e}")))
    }
}

impl dyn CgMarketChart {
    /// Build a `CgMarketChart` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn CgMarketChart>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, String, u32) -> Result<serde_json::Value, CoinlensError>,
    {
        struct FnChart<F>(F);
        #[async_trait]
        impl<F> CgMarketChart for FnChart<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, String, u32) -> Result<serde_json::Value, CoinlensError>,
        {
            async fn fetch_market_chart(
                &self,
                coin_id: &str,
                vs_currency: &str,
                days: u32,
            ) -> Result<serde_json::Value, CoinlensError> {
                (self.0)(coin_id.to_string(), vs_currency.to_string(), days)
            }
        }
        Arc::new(FnChart(f))
    }
}
