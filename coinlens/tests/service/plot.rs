use std::sync::Arc;

use coinlens::{CoinlensError, EnrichOptions, Frequency, Provider, renderer_fn};
use coinlens_mock::MockConnector;

use crate::helpers::{btc_req, day, eth_req, floats, lens_with, mock_lens};

#[tokio::test]
async fn plot_request_annotations() {
    let options = EnrichOptions::new().window_size(2).volatility_window(2);
    let req = mock_lens()
        .plot_request(&eth_req(), &options, Some(Frequency::Weekly))
        .await
        .unwrap();

    assert_eq!(req.title, "Enriched analytics - ETH/USD | Provider: COINGECKO");
    assert_eq!(
        req.subtitle,
        "min=100.00  max=120.00  mean=110.00  Total % change=20.00%"
    );
    assert_eq!(req.rolling_column.as_deref(), Some("rolling_mean_2"));
    assert_eq!(req.volatility_column.as_deref(), Some("volatility_2"));
    assert_eq!(req.normalized_column, None);
    assert_eq!(req.stats.count, 5);

    // 2025-11-17..21 all close on Sunday 2025-11-23.
    let overlay = req.overlay.as_ref().expect("overlay");
    assert_eq!(overlay.timestamps().unwrap(), vec![day(2025, 11, 23)]);
    assert_eq!(floats(overlay, "price"), vec![Some(120.0)]);
    assert_eq!(req.table.row_count(), 5);
}

#[tokio::test]
async fn no_overlay_without_display_frequency() {
    let req = mock_lens()
        .plot_request(&btc_req(3), &EnrichOptions::default(), None)
        .await
        .unwrap();
    assert!(req.overlay.is_none());
    assert_eq!(req.display_frequency, None);
}

#[tokio::test]
async fn provider_label_follows_request() {
    let lens = lens_with(Arc::new(MockConnector::new().for_provider(Provider::Kraken)));
    let req = lens
        .plot_request(
            &eth_req().with_provider(Provider::Kraken),
            &EnrichOptions::default(),
            None,
        )
        .await
        .unwrap();
    assert!(req.title.ends_with("| Provider: KRAKEN"), "{}", req.title);
}

#[tokio::test]
async fn render_hands_request_to_sink() {
    let renderer = renderer_fn(|req| Ok(req.title.clone().into_bytes()));
    let bytes = mock_lens()
        .render(&eth_req(), &EnrichOptions::default(), None, &renderer)
        .await
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Enriched analytics - ETH/USD | Provider: COINGECKO"
    );

    let failing = renderer_fn(|_| Err(CoinlensError::Other("no backend".into())));
    let err = mock_lens()
        .render(&eth_req(), &EnrichOptions::default(), None, &failing)
        .await
        .unwrap_err();
    assert_eq!(err, CoinlensError::Other("no backend".into()));
}
