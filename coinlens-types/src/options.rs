//! Options controlling the enrichment pipeline.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoinlensError;

/// Resampling cadence.
///
/// Weekly buckets close on Sunday; monthly and yearly buckets close on the
/// last day of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One bucket per calendar day.
    Daily,
    /// Weeks ending Sunday.
    Weekly,
    /// Calendar months, labeled by their last day.
    Monthly,
    /// Calendar years, labeled by December 31.
    Yearly,
}

impl Frequency {
    /// Lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = CoinlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(CoinlensError::InvalidArg(format!(
                "invalid frequency '{s}'; expected one of daily, weekly, monthly, yearly"
            ))),
        }
    }
}

/// Which optional pipeline stages to run, and with what parameters.
///
/// A `None` field skips its stage. Window sizes are signed so that invalid
/// requests (zero or negative) reach the pipeline and are rejected there with
/// a typed error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichOptions {
    /// Resample before computing returns.
    pub frequency: Option<Frequency>,
    /// Rolling mean window; must be positive.
    pub window_size: Option<i64>,
    /// Volatility window; must be greater than one.
    pub volatility_window: Option<i64>,
    /// Base value for normalization.
    pub normalize_base: Option<f64>,
    /// Inclusive lower bound of the analyzed range.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound of the analyzed range.
    pub end: Option<DateTime<Utc>>,
}

impl EnrichOptions {
    /// Options that run only the returns stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resampling frequency.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Set the rolling mean window.
    #[must_use]
    pub const fn window_size(mut self, window: i64) -> Self {
        self.window_size = Some(window);
        self
    }

    /// Set the volatility window.
    #[must_use]
    pub const fn volatility_window(mut self, window: i64) -> Self {
        self.volatility_window = Some(window);
        self
    }

    /// Set the normalization base.
    #[must_use]
    pub const fn normalize_base(mut self, base: f64) -> Self {
        self.normalize_base = Some(base);
        self
    }

    /// Set the inclusive lower bound.
    #[must_use]
    pub const fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub const fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }
}
