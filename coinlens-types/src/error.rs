use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the coinlens workspace.
///
/// Covers argument validation, table/column validation raised by the analytics
/// engines, provider-tagged failures, and the aggregate computation failure
/// surfaced at the enrichment pipeline boundary.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoinlensError {
    /// Invalid input argument or option (window sizes, frequency strings, day counts).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The requested symbol/currency/provider combination is not supported.
    #[error("unsupported: {capability}")]
    Unsupported {
        /// Description of the unsupported combination (e.g. "binance/bitcoin").
        capability: String,
    },

    /// The table has zero rows.
    #[error("empty table: cannot compute on a table without rows")]
    EmptyTable,

    /// The named column does not exist in the table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound {
        /// Requested column name.
        column: String,
    },

    /// The named column exists but does not hold numbers.
    #[error("column '{column}' is not numeric")]
    NonNumericColumn {
        /// Offending column name.
        column: String,
    },

    /// Every value of the named column is missing.
    #[error("all values in column '{column}' are missing")]
    AllMissing {
        /// Offending column name.
        column: String,
    },

    /// Normalization was requested but the first element of the column is zero.
    #[error("cannot normalize column '{column}': first element is zero")]
    ZeroBase {
        /// Offending column name.
        column: String,
    },

    /// Issues with the returned or expected data (malformed upstream payloads, bad timestamps).
    #[error("data issue: {0}")]
    Data(String),

    /// The provider returned no data for the request.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "market chart for bitcoin/usd (7 days)".
        what: String,
    },

    /// An individual connector failed (network failure or non-success status).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "market-chart").
        capability: String,
    },

    /// A whole use case exceeded the configured request deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Use case label (e.g. "enriched-chart").
        capability: String,
    },

    /// A failure inside the enrichment pipeline, wrapping the originating message.
    #[error("computation failed: {0}")]
    Computation(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

/// Coarse classification of [`CoinlensError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Invalid or unsupported option combinations.
    Configuration,
    /// Empty, absent, non-numeric, or malformed data.
    Data,
    /// Upstream communication failures.
    Provider,
    /// Failures raised inside the enrichment pipeline.
    Computation,
}

impl CoinlensError {
    /// Helper: build an `Unsupported` error for a combination label.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: build a `ColumnNotFound` error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Helper: build a `NonNumericColumn` error.
    pub fn non_numeric(column: impl Into<String>) -> Self {
        Self::NonNumericColumn {
            column: column.into(),
        }
    }

    /// Helper: build an `AllMissing` error.
    pub fn all_missing(column: impl Into<String>) -> Self {
        Self::AllMissing {
            column: column.into(),
        }
    }

    /// Helper: build a `ZeroBase` error.
    pub fn zero_base(column: impl Into<String>) -> Self {
        Self::ZeroBase {
            column: column.into(),
        }
    }

    /// Wrap any error raised by a pipeline stage into a single `Computation` error.
    ///
    /// An error that already is a `Computation` is returned unchanged so nesting
    /// never produces "computation failed: computation failed: ...".
    #[must_use]
    pub fn computation(inner: Self) -> Self {
        match inner {
            e @ Self::Computation(_) => e,
            other => Self::Computation(other.to_string()),
        }
    }

    /// Classify this error into one of the four error kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArg(_) | Self::Unsupported { .. } => ErrorKind::Configuration,
            Self::EmptyTable
            | Self::ColumnNotFound { .. }
            | Self::NonNumericColumn { .. }
            | Self::AllMissing { .. }
            | Self::ZeroBase { .. }
            | Self::Data(_)
            | Self::NotFound { .. } => ErrorKind::Data,
            Self::Connector { .. }
            | Self::ProviderTimeout { .. }
            | Self::RequestTimeout { .. }
            | Self::Other(_) => ErrorKind::Provider,
            Self::Computation(_) => ErrorKind::Computation,
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are unsupported combinations and benign not-found
    /// conditions; callers usually translate them into a 4xx-style response.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
