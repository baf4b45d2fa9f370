//! Market identifiers and raw price series DTOs.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoinlensError;

/// Supported crypto assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Bitcoin.
    Btc,
    /// Ether.
    Eth,
    /// XRP.
    Xrp,
}

impl Symbol {
    /// All supported symbols, in declaration order.
    pub const ALL: [Self; 3] = [Self::Btc, Self::Eth, Self::Xrp];

    /// Upper-case ticker name, e.g. `BTC`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Xrp => "XRP",
        }
    }

    /// Canonical lower-case asset id, e.g. `bitcoin`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btc => "bitcoin",
            Self::Eth => "ethereum",
            Self::Xrp => "ripple",
        }
    }
}

/// Supported quote currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Australian dollar.
    Aud,
    /// Swiss franc.
    Chf,
    /// Japanese yen.
    Jpy,
}

impl Currency {
    /// All supported currencies, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Aud,
        Self::Chf,
        Self::Jpy,
    ];

    /// Upper-case ISO code, e.g. `USD`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Aud => "AUD",
            Self::Chf => "CHF",
            Self::Jpy => "JPY",
        }
    }

    /// Lower-case code, e.g. `usd`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
            Self::Aud => "aud",
            Self::Chf => "chf",
            Self::Jpy => "jpy",
        }
    }
}

/// Upstream market-data providers known to the system.
///
/// Only [`Provider::CoinGecko`] has a connector; the others parse so that
/// requests naming them fail with a typed `Unsupported` error rather than a
/// parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// CoinGecko public/pro API.
    CoinGecko,
    /// Binance.
    Binance,
    /// Kraken.
    Kraken,
}

impl Provider {
    /// Upper-case display name, e.g. `COINGECKO`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CoinGecko => "COINGECKO",
            Self::Binance => "BINANCE",
            Self::Kraken => "KRAKEN",
        }
    }

    /// Lower-case wire id, e.g. `coingecko`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CoinGecko => "coingecko",
            Self::Binance => "binance",
            Self::Kraken => "kraken",
        }
    }
}

macro_rules! impl_parse_display {
    ($ty:ident, $label:literal) => {
        impl FromStr for $ty {
            type Err = CoinlensError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|v| {
                        needle.eq_ignore_ascii_case(v.name())
                            || needle.eq_ignore_ascii_case(v.as_str())
                    })
                    .ok_or_else(|| {
                        CoinlensError::InvalidArg(format!("unknown {}: '{s}'", $label))
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl Provider {
    /// All known providers, in declaration order.
    pub const ALL: [Self; 3] = [Self::CoinGecko, Self::Binance, Self::Kraken];
}

impl_parse_display!(Symbol, "symbol");
impl_parse_display!(Currency, "currency");
impl_parse_display!(Provider, "provider");

/// One observation of a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Instant of the observation (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed price in the quote currency.
    pub price: f64,
}

impl PricePoint {
    /// Build a point from an instant and a price.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// A raw price series as returned by a provider, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketChartData {
    /// Asset the series belongs to.
    pub symbol: Symbol,
    /// Quote currency of `points`.
    pub currency: Currency,
    /// Observations, ascending by timestamp.
    pub points: Vec<PricePoint>,
}

/// Parameters of a market chart fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketChartRequest {
    /// Asset to fetch.
    pub symbol: Symbol,
    /// Quote currency.
    pub currency: Currency,
    /// Number of days of history; must be positive.
    pub days: i64,
    /// Provider to route the request to.
    pub provider: Provider,
}

impl MarketChartRequest {
    /// Build a request routed to [`Provider::CoinGecko`].
    #[must_use]
    pub const fn new(symbol: Symbol, currency: Currency, days: i64) -> Self {
        Self {
            symbol,
            currency,
            days,
            provider: Provider::CoinGecko,
        }
    }

    /// Route the request to another provider.
    #[must_use]
    pub const fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }
}
