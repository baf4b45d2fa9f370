use std::sync::Arc;

use async_trait::async_trait;
use coinlens::{
    CoinlensConnector, CoinlensError, Currency, ErrorKind, MarketChartData, MarketChartProvider,
    MarketChartRequest, Provider, Symbol,
};
use coinlens_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{btc_req, lens_with, mock_lens};

/// Serves only BTC in USD and panics if asked for anything else.
struct BtcUsdOnly;

impl CoinlensConnector for BtcUsdOnly {
    fn name(&self) -> &'static str {
        "btc-usd-only"
    }
    fn provider(&self) -> Provider {
        Provider::CoinGecko
    }
    fn supports(&self, symbol: Symbol, currency: Currency) -> bool {
        symbol == Symbol::Btc && currency == Currency::Usd
    }
    fn as_market_chart_provider(&self) -> Option<&dyn MarketChartProvider> {
        Some(self as &dyn MarketChartProvider)
    }
}

#[async_trait]
impl MarketChartProvider for BtcUsdOnly {
    async fn market_chart(
        &self,
        symbol: Symbol,
        currency: Currency,
        days: u32,
    ) -> Result<MarketChartData, CoinlensError> {
        assert_eq!((symbol, currency), (Symbol::Btc, Currency::Usd));
        MockConnector::new().market_chart(symbol, currency, days).await
    }
}

/// Registered but without market chart capability.
struct Capless;

impl CoinlensConnector for Capless {
    fn name(&self) -> &'static str {
        "capless"
    }
    fn provider(&self) -> Provider {
        Provider::Binance
    }
}

#[tokio::test]
async fn fetches_fixture_series() {
    let data = mock_lens().market_chart(&btc_req(9)).await.unwrap();
    assert_eq!(data.symbol, Symbol::Btc);
    assert_eq!(data.currency, Currency::Usd);
    assert_eq!(data.points.len(), 9);
    assert_eq!(data.points[8].price, 180.0);
}

#[tokio::test]
async fn provider_without_connector_is_checked_before_days() {
    let req = btc_req(0).with_provider(Provider::Binance);
    let err = mock_lens().market_chart(&req).await.unwrap_err();
    assert!(matches!(err, CoinlensError::Unsupported { .. }), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(!err.is_actionable());
}

#[tokio::test]
async fn connector_without_capability_is_unsupported() {
    let lens = lens_with(Arc::new(Capless));
    let req = btc_req(3).with_provider(Provider::Binance);
    let err = lens.market_chart(&req).await.unwrap_err();
    assert!(matches!(err, CoinlensError::Unsupported { .. }), "{err:?}");
}

#[tokio::test]
async fn non_positive_days_are_invalid() {
    let lens = mock_lens();
    for days in [0, -1, -365] {
        let err = lens.market_chart(&btc_req(days)).await.unwrap_err();
        assert!(matches!(err, CoinlensError::InvalidArg(_)), "{days}: {err:?}");
    }
    let err = lens
        .market_chart(&btc_req(i64::from(u32::MAX) + 1))
        .await
        .unwrap_err();
    assert!(matches!(err, CoinlensError::InvalidArg(_)));
}

#[tokio::test]
async fn unsupported_pair_never_reaches_provider() {
    let lens = lens_with(Arc::new(BtcUsdOnly));
    assert_eq!(lens.market_chart(&btc_req(2)).await.unwrap().points.len(), 2);

    let req = MarketChartRequest::new(Symbol::Eth, Currency::Usd, 2);
    let err = lens.market_chart(&req).await.unwrap_err();
    assert!(matches!(err, CoinlensError::Unsupported { .. }), "{err:?}");
}

#[tokio::test]
async fn empty_series_is_not_found() {
    let req = MarketChartRequest::new(Symbol::Xrp, Currency::Usd, 30);
    let err = mock_lens().market_chart(&req).await.unwrap_err();
    match err {
        CoinlensError::NotFound { ref what } => {
            assert_eq!(what, "market chart for ripple/usd (30 days)");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn provider_failures_surface_unchanged() {
    let lens = lens_with(Arc::new(MockConnector::failing()));
    let err = lens.market_chart(&btc_req(3)).await.unwrap_err();
    assert_eq!(
        err,
        CoinlensError::connector("coinlens-mock", "forced failure: market-chart")
    );

    let (dynamic, controller) = DynamicMockConnector::new_with_controller("dyn", Provider::CoinGecko);
    controller
        .set_chart_behavior(
            Symbol::Btc,
            MockBehavior::Fail(CoinlensError::Data("missing 'prices'".into())),
        )
        .await;
    let err = lens_with(dynamic).market_chart(&btc_req(3)).await.unwrap_err();
    assert!(matches!(err, CoinlensError::Data(_)));
}

#[tokio::test]
async fn routes_by_provider_and_passes_day_count() {
    let (dynamic, controller) = DynamicMockConnector::new_with_controller("dyn", Provider::CoinGecko);
    let lens = coinlens::Coinlens::builder()
        .with_connector(dynamic)
        .with_connector(Arc::new(MockConnector::new().for_provider(Provider::Kraken)))
        .build()
        .unwrap();

    let kraken = lens
        .market_chart(&btc_req(4).with_provider(Provider::Kraken))
        .await
        .unwrap();
    assert_eq!(kraken.points.len(), 4);
    assert!(controller.chart_requests().await.is_empty());

    let err = lens.market_chart(&btc_req(7)).await.unwrap_err();
    assert!(matches!(err, CoinlensError::Unsupported { .. }));
    assert_eq!(
        controller.chart_requests().await,
        vec![(Symbol::Btc, Currency::Usd, 7)]
    );
}
