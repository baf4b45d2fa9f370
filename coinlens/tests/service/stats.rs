use std::sync::Arc;

use coinlens::{CoinlensError, Currency, ErrorKind, MarketChartRequest, Symbol};
use coinlens_mock::MockConnector;

use crate::helpers::{approx, btc_req, eth_req, lens_with, mock_lens};

#[tokio::test]
async fn eth_fixture_stats() {
    let stats = mock_lens().stats(&eth_req()).await.unwrap();
    assert_eq!(stats.count, 5);
    assert_eq!(stats.min_price, 100.0);
    assert_eq!(stats.max_price, 120.0);
    assert_eq!(stats.mean_price, 110.0);
    assert_eq!(stats.median_price, 110.0);
    assert!(approx(stats.std_dev, 7.905_69), "{}", stats.std_dev);
    assert!(approx(stats.variance, 62.5));
    assert_eq!(stats.first_price, 100.0);
    assert_eq!(stats.last_price, 120.0);
    assert!(approx(stats.percent_change, 20.0));
}

#[tokio::test]
async fn linear_fixture_stats() {
    let stats = mock_lens().stats(&btc_req(4)).await.unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.median_price, 115.0);
    assert_eq!(stats.first_price, 100.0);
    assert_eq!(stats.last_price, 130.0);
    assert!(approx(stats.percent_change, 30.0));
}

#[tokio::test]
async fn single_point_has_nan_spread() {
    let stats = mock_lens().stats(&btc_req(1)).await.unwrap();
    assert_eq!(stats.count, 1);
    assert!(stats.std_dev.is_nan());
    assert!(stats.variance.is_nan());
    assert_eq!(stats.percent_change, 0.0);
}

#[tokio::test]
async fn fetch_errors_are_not_wrapped() {
    let req = MarketChartRequest::new(Symbol::Xrp, Currency::Eur, 3);
    let err = mock_lens().stats(&req).await.unwrap_err();
    assert!(matches!(err, CoinlensError::NotFound { .. }));

    let err = lens_with(Arc::new(MockConnector::failing()))
        .stats(&btc_req(3))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
}
