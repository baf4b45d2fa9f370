use std::sync::Arc;
use std::time::Duration;

use coinlens::{Coinlens, CoinlensConfig, CoinlensError, EnrichOptions, Provider};
use coinlens_mock::MockConnector;

use crate::helpers::eth_req;

#[test]
fn build_requires_a_connector() {
    let err = Coinlens::builder().build().err().expect("no connectors");
    assert!(matches!(err, CoinlensError::InvalidArg(_)));
}

#[test]
fn build_rejects_bad_price_keys() {
    for key in ["", "  ", "timestamp"] {
        let err = Coinlens::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .price_key(key)
            .build()
            .err()
            .expect("bad key");
        assert!(matches!(err, CoinlensError::InvalidArg(_)), "{key:?}");
    }
}

#[test]
fn defaults_and_overrides() {
    let lens = crate::helpers::mock_lens();
    assert_eq!(lens.config(), &CoinlensConfig::default());
    assert_eq!(lens.config().provider_timeout, Duration::from_secs(5));
    assert_eq!(lens.config().request_timeout, None);

    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(750))
        .request_timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    assert_eq!(lens.config().provider_timeout, Duration::from_millis(750));
    assert_eq!(lens.config().request_timeout, Some(Duration::from_secs(3)));
}

#[test]
fn first_registered_connector_wins_per_provider() {
    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_connector(Arc::new(MockConnector::failing()))
        .with_connector(Arc::new(MockConnector::new().for_provider(Provider::Kraken)))
        .build()
        .unwrap();
    assert!(lens.connector_for(Provider::CoinGecko).is_some());
    assert!(lens.connector_for(Provider::Kraken).is_some());
    assert!(lens.connector_for(Provider::Binance).is_none());
}

#[tokio::test]
async fn custom_price_key_names_the_subject_column() {
    let lens = Coinlens::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .price_key("close")
        .build()
        .unwrap();
    let table = lens
        .enriched_chart(&eth_req(), &EnrichOptions::new().normalize_base(1.0))
        .await
        .unwrap();
    assert_eq!(
        table.column_names(),
        vec![
            "timestamp",
            "close",
            "pct_change",
            "acum_pct_change",
            "normalized_close_base_1.0"
        ]
    );
}
