use chrono::{DateTime, Duration, Utc};
use coinlens_core::{
    Column, EnrichOptions, Frequency, PricePoint, TimeSeriesTable, calculate_stats,
    compute_returns, compute_rolling_mean, enrich, resample_price_series, trim_date_range,
};
use proptest::prelude::*;

fn arb_start() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..2_000_000_000i64).prop_map(|s| DateTime::from_timestamp(s, 0).unwrap())
}

/// Ascending series with strictly positive prices and 1-48h spacing.
fn arb_series() -> impl Strategy<Value = Vec<PricePoint>> {
    (
        arb_start(),
        proptest::collection::vec((1i64..48, 0.01f64..1_000_000.0), 1..120),
    )
        .prop_map(|(start, steps)| {
            let mut ts = start;
            steps
                .into_iter()
                .map(|(hours, price)| {
                    ts += Duration::hours(hours);
                    PricePoint::new(ts, price)
                })
                .collect()
        })
}

fn floats(table: &TimeSeriesTable, name: &str) -> Vec<Option<f64>> {
    match table.column(name) {
        Some(Column::Float(v)) => v.clone(),
        other => panic!("expected float column {name}, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn engines_keep_rows_and_subject(points in arb_series(), window in 1usize..10) {
        let mut table = TimeSeriesTable::from_points(&points, "price");
        let original = floats(&table, "price");
        compute_returns(&mut table, "price").unwrap();
        if window <= points.len() {
            compute_rolling_mean(&mut table, window, "price").unwrap();
        }
        prop_assert_eq!(table.row_count(), points.len());
        prop_assert_eq!(floats(&table, "price"), original);
        prop_assert_eq!(floats(&table, "pct_change")[0], None);
        prop_assert_eq!(floats(&table, "acum_pct_change")[0], Some(0.0));
    }

    #[test]
    fn stats_bounds_hold(points in arb_series()) {
        let table = TimeSeriesTable::from_points(&points, "price");
        let s = calculate_stats(&table, "price").unwrap();
        prop_assert_eq!(s.count, points.len());
        prop_assert!(s.min_price <= s.median_price && s.median_price <= s.max_price);
        prop_assert!(s.min_price <= s.mean_price * (1.0 + 1e-12));
        prop_assert!(s.mean_price <= s.max_price * (1.0 + 1e-12));
        prop_assert_eq!(s.first_price, points[0].price);
        prop_assert_eq!(s.last_price, points[points.len() - 1].price);
    }

    #[test]
    fn resample_is_gapless_sorted_and_idempotent(
        points in arb_series(),
        frequency in prop::sample::select(vec![Frequency::Daily, Frequency::Weekly, Frequency::Monthly, Frequency::Yearly]),
    ) {
        let table = TimeSeriesTable::from_points(&points, "price");
        let once = resample_price_series(&table, "price", frequency).unwrap();
        let stamps = once.timestamps().unwrap();
        prop_assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(floats(&once, "price").iter().all(Option::is_some));
        if frequency == Frequency::Daily {
            prop_assert!(stamps.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
        }
        if frequency == Frequency::Weekly {
            prop_assert!(stamps.windows(2).all(|w| w[1] - w[0] == Duration::days(7)));
        }
        let last_price = points[points.len() - 1].price;
        prop_assert_eq!(floats(&once, "price").last().copied().flatten(), Some(last_price));

        let projected = once.select(&["timestamp", "price"]).unwrap();
        let twice = resample_price_series(&projected, "price", frequency).unwrap();
        prop_assert_eq!(twice.select(&["timestamp", "price"]).unwrap(), projected);
    }

    #[test]
    fn trim_keeps_only_rows_in_range(points in arb_series(), a in 0usize..120, b in 0usize..120) {
        let table = TimeSeriesTable::from_points(&points, "price");
        let start = points[a % points.len()].timestamp;
        let end = points[b % points.len()].timestamp;
        let out = trim_date_range(&table, Some(start), Some(end)).unwrap();
        let expected = points.iter().filter(|p| p.timestamp >= start && p.timestamp <= end).count();
        prop_assert_eq!(out.row_count(), expected);
        prop_assert!(out.timestamps().unwrap().iter().all(|t| *t >= start && *t <= end));
    }

    #[test]
    fn enrich_never_mutates_price(points in arb_series()) {
        let table = TimeSeriesTable::from_points(&points, "price");
        let original = floats(&table, "price");
        let out = enrich(table, "price", &EnrichOptions::new().normalize_base(100.0)).unwrap();
        prop_assert_eq!(floats(&out, "price"), original);
        let norm = floats(&out, "normalized_price_base_100.0");
        prop_assert_eq!(norm[0], Some(100.0));
    }
}
