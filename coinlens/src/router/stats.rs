use coinlens_core::{CoinlensError, MarketChartRequest, StatsRecord, calculate_stats};

use crate::Coinlens;

impl Coinlens {
    /// Summary statistics of the fetched price series.
    ///
    /// # Errors
    /// Fetch errors as in [`Coinlens::market_chart`]; statistics failures as
    /// `Computation`; `RequestTimeout` when the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::router::stats",
            skip(self, req),
            fields(symbol = %req.symbol, currency = %req.currency, days = req.days),
            err,
        )
    )]
    pub async fn stats(&self, req: &MarketChartRequest) -> Result<StatsRecord, CoinlensError> {
        self.with_request_deadline("stats", async {
            let table = self.fetch_table(req).await?;
            calculate_stats(&table, &self.cfg.price_key).map_err(CoinlensError::computation)
        })
        .await
    }
}
