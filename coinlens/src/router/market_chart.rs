use coinlens_core::{CoinlensError, MarketChartData, MarketChartRequest};

use crate::Coinlens;

pub(crate) const CAPABILITY: &str = "market-chart";

impl Coinlens {
    /// Fetch the raw price series for a request.
    ///
    /// Checks run in this order:
    /// - no connector registered for the provider (or it lacks market charts) → `Unsupported`
    /// - `days ≤ 0` → `InvalidArg`
    /// - the connector does not serve the symbol/currency pair → `Unsupported`
    ///
    /// Provider failures (`Connector`, `ProviderTimeout`, `Data`) surface
    /// unchanged; a series without points is `NotFound`.
    ///
    /// # Errors
    /// See above; `RequestTimeout` when the request deadline elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "coinlens::router::market_chart",
            skip(self, req),
            fields(
                symbol = %req.symbol,
                currency = %req.currency,
                provider = %req.provider,
                days = req.days,
            ),
            err,
        )
    )]
    pub async fn market_chart(
        &self,
        req: &MarketChartRequest,
    ) -> Result<MarketChartData, CoinlensError> {
        self.with_request_deadline(CAPABILITY, self.market_chart_inner(req))
            .await
    }

    pub(crate) async fn market_chart_inner(
        &self,
        req: &MarketChartRequest,
    ) -> Result<MarketChartData, CoinlensError> {
        let connector = self.connector_for(req.provider).ok_or_else(|| {
            CoinlensError::unsupported(format!(
                "{CAPABILITY} via {}: no connector registered",
                req.provider
            ))
        })?;
        let Some(provider) = connector.as_market_chart_provider() else {
            return Err(CoinlensError::unsupported(format!(
                "{CAPABILITY} via {}",
                connector.name()
            )));
        };

        if req.days <= 0 {
            return Err(CoinlensError::InvalidArg(format!(
                "days must be positive, got {}",
                req.days
            )));
        }
        let days = u32::try_from(req.days)
            .map_err(|_| CoinlensError::InvalidArg(format!("days out of range: {}", req.days)))?;

        if !connector.supports(req.symbol, req.currency) {
            return Err(CoinlensError::unsupported(format!(
                "{}/{}/{}",
                req.provider, req.symbol, req.currency
            )));
        }

        let data = Self::provider_call_with_timeout(
            connector.name(),
            CAPABILITY,
            self.cfg.provider_timeout,
            provider.market_chart(req.symbol, req.currency, days),
        )
        .await?;

        if data.points.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!(connector = connector.name(), "provider returned no price points");
            return Err(CoinlensError::not_found(format!(
                "market chart for {}/{} ({} days)",
                req.symbol, req.currency, req.days
            )));
        }
        Ok(data)
    }
}
