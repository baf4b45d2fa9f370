use coinlens_core::{CoinlensError, MarketChartRequest, TimeSeriesTable};

use crate::Coinlens;

impl Coinlens {
    /// Fetch a request's series and build the analytics table from it.
    pub(crate) async fn fetch_table(
        &self,
        req: &MarketChartRequest,
    ) -> Result<TimeSeriesTable, CoinlensError> {
        let data = self.market_chart_inner(req).await?;
        Ok(TimeSeriesTable::from_market_chart(&data, &self.cfg.price_key))
    }
}
