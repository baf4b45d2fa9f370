use std::sync::Arc;
use std::time::Duration;

use coinlens::{Coinlens, CoinlensError, EnrichOptions, Provider, Symbol};
use coinlens_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::{btc_req, eth_req};

#[tokio::test(start_paused = true)]
async fn slow_provider_maps_to_provider_timeout() {
    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::with_latency(Duration::from_millis(200))))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = lens.market_chart(&btc_req(3)).await.unwrap_err();
    assert_eq!(
        err,
        CoinlensError::provider_timeout("coinlens-mock", "market-chart")
    );

    let err = lens.stats(&btc_req(3)).await.unwrap_err();
    assert!(matches!(err, CoinlensError::ProviderTimeout { .. }), "{err:?}");
}

#[tokio::test(start_paused = true)]
async fn latency_within_timeouts_succeeds() {
    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::with_latency(Duration::from_millis(20))))
        .provider_timeout(Duration::from_millis(500))
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    assert_eq!(lens.stats(&eth_req()).await.unwrap().count, 5);
}

#[tokio::test(start_paused = true)]
async fn request_deadline_bounds_whole_use_case() {
    let (dynamic, controller) = DynamicMockConnector::new_with_controller("hang", Provider::CoinGecko);
    controller
        .set_chart_behavior(Symbol::Btc, MockBehavior::Hang)
        .await;
    let lens = Coinlens::builder()
        .with_connector(dynamic)
        .provider_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = lens.market_chart(&btc_req(3)).await.unwrap_err();
    assert_eq!(err, CoinlensError::request_timeout("market-chart"));

    let err = lens.stats(&btc_req(3)).await.unwrap_err();
    assert_eq!(err, CoinlensError::request_timeout("stats"));

    let err = lens
        .enriched_table(&btc_req(3), &EnrichOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err, CoinlensError::request_timeout("enriched-table"));
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_without_deadline_hits_provider_timeout() {
    let (dynamic, controller) = DynamicMockConnector::new_with_controller("hang", Provider::CoinGecko);
    controller
        .set_chart_behavior(Symbol::Btc, MockBehavior::Hang)
        .await;
    let lens = Coinlens::builder()
        .with_connector(dynamic)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = lens
        .enriched_chart(&btc_req(3), &EnrichOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err, CoinlensError::provider_timeout("hang", "market-chart"));
}

#[tokio::test(start_paused = true)]
async fn request_deadline_applies_to_raw_market_chart() {
    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::with_latency(Duration::from_millis(500))))
        .provider_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = lens.market_chart(&eth_req()).await.unwrap_err();
    assert!(matches!(err, CoinlensError::RequestTimeout { .. }), "{err:?}");
    let err = lens.stats(&eth_req()).await.unwrap_err();
    assert_eq!(err, CoinlensError::request_timeout("stats"));
}
