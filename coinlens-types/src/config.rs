//! Configuration for the `Coinlens` service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Coinlens` service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinlensConfig {
    /// Timeout applied to each provider call.
    pub provider_timeout: Duration,
    /// Optional overall deadline for a whole use case (fetch plus compute).
    pub request_timeout: Option<Duration>,
    /// Name of the subject numeric column in built tables.
    pub price_key: String,
}

impl Default for CoinlensConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
            price_key: "price".to_string(),
        }
    }
}
