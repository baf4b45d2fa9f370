use coinlens::{CoinlensError, EnrichOptions, ErrorKind, Frequency};
use serde_json::json;

use crate::helpers::{approx, btc_req, day, eth_req, floats, mock_lens};

#[tokio::test]
async fn all_stages_on_eth_fixture() {
    let options = EnrichOptions::new()
        .window_size(2)
        .volatility_window(2)
        .normalize_base(100.0);
    let table = mock_lens().enriched_chart(&eth_req(), &options).await.unwrap();

    assert_eq!(
        table.column_names(),
        vec![
            "timestamp",
            "price",
            "pct_change",
            "acum_pct_change",
            "rolling_mean_2",
            "volatility_2",
            "normalized_price_base_100.0",
        ]
    );
    assert_eq!(table.row_count(), 5);

    assert_eq!(
        floats(&table, "acum_pct_change"),
        vec![Some(0.0), Some(10.0), Some(5.0), Some(15.0), Some(20.0)]
    );
    assert_eq!(floats(&table, "pct_change")[0], None);
    assert_eq!(
        floats(&table, "rolling_mean_2"),
        vec![None, Some(105.0), Some(107.5), Some(110.0), Some(117.5)]
    );

    let vol = floats(&table, "volatility_2");
    assert_eq!(&vol[..2], &[None, None]);
    for (got, want) in vol[2..].iter().zip([0.102_85, 0.099_48, 0.036_60]) {
        assert!(approx(got.unwrap(), want), "{got:?} vs {want}");
    }

    assert_eq!(
        floats(&table, "normalized_price_base_100.0"),
        floats(&table, "price")
    );
}

#[tokio::test]
async fn weekly_resample_through_service() {
    let options = EnrichOptions::new().frequency(Frequency::Weekly);
    let table = mock_lens().enriched_chart(&btc_req(9), &options).await.unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.timestamps().unwrap(),
        vec![day(2023, 1, 1), day(2023, 1, 8), day(2023, 1, 15)]
    );
    assert_eq!(
        floats(&table, "price"),
        vec![Some(100.0), Some(170.0), Some(180.0)]
    );
    assert_eq!(
        floats(&table, "week_number"),
        vec![Some(52.0), Some(1.0), Some(2.0)]
    );
}

#[tokio::test]
async fn trimmed_range_rebases_cumulative_change() {
    let options = EnrichOptions::new()
        .start(day(2023, 1, 3))
        .end(day(2023, 1, 5));
    let table = mock_lens().enriched_chart(&btc_req(10), &options).await.unwrap();
    assert_eq!(table.row_count(), 3);
    let acum = floats(&table, "acum_pct_change");
    assert_eq!(acum[0], Some(0.0));
    assert!(approx(acum[2].unwrap(), 50.0 / 3.0));
}

#[tokio::test]
async fn inverted_range_fails_as_computation() {
    let options = EnrichOptions::new()
        .start(day(2023, 1, 5))
        .end(day(2023, 1, 3));
    let err = mock_lens()
        .enriched_chart(&btc_req(10), &options)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Computation, "{err:?}");
}

#[tokio::test]
async fn invalid_windows_fail_as_computation() {
    let lens = mock_lens();
    for options in [
        EnrichOptions::new().window_size(0),
        EnrichOptions::new().window_size(6),
        EnrichOptions::new().volatility_window(1),
    ] {
        let err = lens.enriched_chart(&eth_req(), &options).await.unwrap_err();
        assert!(matches!(err, CoinlensError::Computation(_)), "{options:?}: {err:?}");
    }
}

#[tokio::test]
async fn enriched_table_is_row_major() {
    let resp = mock_lens()
        .enriched_table(&eth_req(), &EnrichOptions::default())
        .await
        .unwrap();
    assert_eq!(
        resp.columns,
        vec!["timestamp", "price", "pct_change", "acum_pct_change"]
    );
    assert_eq!(resp.rows.len(), 5);
    assert_eq!(
        resp.rows[0],
        vec![
            json!("2025-11-17T00:00:00+00:00"),
            json!(100.0),
            json!(null),
            json!(0.0)
        ]
    );
    assert_eq!(resp.rows[4][3], json!(20.0));
}
