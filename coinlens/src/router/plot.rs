use coinlens_core::{
    ChartRenderer, CoinlensError, EnrichOptions, Frequency, MarketChartRequest, PlotRequest,
};

use crate::Coinlens;

impl Coinlens {
    /// Enriched chart wrapped in a [`PlotRequest`].
    ///
    /// `display_frequency` only affects the overlay series drawn on top of the
    /// chart; the enriched table is left as computed.
    ///
    /// # Errors
    /// As [`Coinlens::enriched_chart`]; plot annotation failures as `Computation`.
    pub async fn plot_request(
        &self,
        req: &MarketChartRequest,
        options: &EnrichOptions,
        display_frequency: Option<Frequency>,
    ) -> Result<PlotRequest, CoinlensError> {
        self.with_request_deadline("plot", async {
            let table = self.enriched_inner(req, options).await?;
            PlotRequest::new(
                table,
                req.symbol,
                req.currency,
                req.provider,
                &self.cfg.price_key,
                display_frequency,
            )
            .map_err(CoinlensError::computation)
        })
        .await
    }

    /// Build the plot request and hand it to `renderer`, returning its bytes.
    ///
    /// # Errors
    /// As [`Coinlens::plot_request`], plus any renderer failure unchanged.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::router::render",
            skip(self, req, options, renderer),
            fields(symbol = %req.symbol, currency = %req.currency, days = req.days),
            err,
        )
    )]
    pub async fn render(
        &self,
        req: &MarketChartRequest,
        options: &EnrichOptions,
        display_frequency: Option<Frequency>,
        renderer: &dyn ChartRenderer,
    ) -> Result<Vec<u8>, CoinlensError> {
        let request = self.plot_request(req, options, display_frequency).await?;
        renderer.render(&request)
    }
}
