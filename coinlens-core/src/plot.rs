//! Rendering requests for an external chart sink.

use coinlens_types::{CoinlensError, Currency, Frequency, Provider, Symbol};
use serde::{Deserialize, Serialize};

use crate::analytics::{calculate_stats, resample_price_series};
use crate::report::StatsRecord;
use crate::table::{TIMESTAMP_COLUMN, TimeSeriesTable};

/// Everything a renderer needs to draw an enriched price chart.
///
/// Panels: price with rolling mean and the optional resampled overlay;
/// `pct_change`/`acum_pct_change`; normalized series with volatility on a
/// secondary axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    /// The enriched table, untouched.
    pub table: TimeSeriesTable,
    /// Asset label.
    pub symbol: Symbol,
    /// Quote currency label.
    pub currency: Currency,
    /// Provider label.
    pub provider: Provider,
    /// Subject column plotted as the price line.
    pub price_key: String,
    /// Frequency of the display-only overlay, if any.
    pub display_frequency: Option<Frequency>,
    /// Resampled `timestamp`/`price_key` series for display only.
    pub overlay: Option<TimeSeriesTable>,
    /// Statistics used for the title annotation.
    pub stats: StatsRecord,
    /// First `rolling_mean_*` column, if present.
    pub rolling_column: Option<String>,
    /// First `volatility_*` column, if present.
    pub volatility_column: Option<String>,
    /// First `normalized_*` column, if present.
    pub normalized_column: Option<String>,
    /// Headline, e.g. `Enriched analytics - BTC/USD | Provider: COINGECKO`.
    pub title: String,
    /// Stats line under the headline.
    pub subtitle: String,
}

impl PlotRequest {
    /// Build a request from an enriched table.
    ///
    /// # Errors
    /// Stats or overlay resampling failures on `price_key`.
    pub fn new(
        table: TimeSeriesTable,
        symbol: Symbol,
        currency: Currency,
        provider: Provider,
        price_key: &str,
        display_frequency: Option<Frequency>,
    ) -> Result<Self, CoinlensError> {
        let stats = calculate_stats(&table, price_key)?;
        let overlay = display_frequency
            .map(|f| {
                let projected = table.select(&[TIMESTAMP_COLUMN, price_key])?;
                resample_price_series(&projected, price_key, f)
            })
            .transpose()?;

        let detect = |prefix: &str| {
            table
                .column_names()
                .into_iter()
                .find(|n| n.starts_with(prefix))
                .map(String::from)
        };
        let rolling_column = detect("rolling_mean_");
        let volatility_column = detect("volatility_");
        let normalized_column = detect("normalized_");

        let title = format!(
            "Enriched analytics - {}/{} | Provider: {}",
            symbol.name(),
            currency.name(),
            provider.name()
        );
        let subtitle = format!(
            "min={:.2}  max={:.2}  mean={:.2}  Total % change={:.2}%",
            stats.min_price, stats.max_price, stats.mean_price, stats.percent_change
        );

        Ok(Self {
            table,
            symbol,
            currency,
            provider,
            price_key: price_key.to_string(),
            display_frequency,
            overlay,
            stats,
            rolling_column,
            volatility_column,
            normalized_column,
            title,
            subtitle,
        })
    }
}

/// Sink that turns a [`PlotRequest`] into encoded image bytes.
pub trait ChartRenderer: Send + Sync {
    /// Render the request, returning the encoded image.
    ///
    /// # Errors
    /// Renderer-specific failures.
    fn render(&self, request: &PlotRequest) -> Result<Vec<u8>, CoinlensError>;
}

/// Build a [`ChartRenderer`] from a closure.
pub fn renderer_fn<F>(f: F) -> impl ChartRenderer
where
    F: Fn(&PlotRequest) -> Result<Vec<u8>, CoinlensError> + Send + Sync + 'static,
{
    struct FnRenderer<F>(F);
    impl<F> ChartRenderer for FnRenderer<F>
    where
        F: Fn(&PlotRequest) -> Result<Vec<u8>, CoinlensError> + Send + Sync + 'static,
    {
        fn render(&self, request: &PlotRequest) -> Result<Vec<u8>, CoinlensError> {
            (self.0)(request)
        }
    }
    FnRenderer(f)
}
