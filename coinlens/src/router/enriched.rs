use coinlens_core::{
    CoinlensError, EnrichOptions, MarketChartRequest, TableResponse, TimeSeriesTable, enrich,
};

use crate::Coinlens;

impl Coinlens {
    /// Fetch a series and run the enrichment pipeline over it.
    ///
    /// # Errors
    /// Fetch errors as in [`Coinlens::market_chart`]; any pipeline failure as
    /// `Computation`; `RequestTimeout` when the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::router::enriched_chart",
            skip(self, req, options),
            fields(symbol = %req.symbol, currency = %req.currency, days = req.days),
            err,
        )
    )]
    pub async fn enriched_chart(
        &self,
        req: &MarketChartRequest,
        options: &EnrichOptions,
    ) -> Result<TimeSeriesTable, CoinlensError> {
        self.with_request_deadline("enriched-chart", self.enriched_inner(req, options))
            .await
    }

    /// Same as [`Coinlens::enriched_chart`], shaped as a row-major response.
    ///
    /// # Errors
    /// As [`Coinlens::enriched_chart`].
    pub async fn enriched_table(
        &self,
        req: &MarketChartRequest,
        options: &EnrichOptions,
    ) -> Result<TableResponse, CoinlensError> {
        self.with_request_deadline("enriched-table", async {
            let table = self.enriched_inner(req, options).await?;
            Ok(TableResponse::from(&table))
        })
        .await
    }

    pub(crate) async fn enriched_inner(
        &self,
        req: &MarketChartRequest,
        options: &EnrichOptions,
    ) -> Result<TimeSeriesTable, CoinlensError> {
        let table = self.fetch_table(req).await?;
        let out = enrich(table, &self.cfg.price_key, options)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = out.row_count(),
            columns = out.column_names().len(),
            "enriched table ready"
        );
        Ok(out)
    }
}
