// Shared fixtures and assertions for the service tests.
use std::sync::Arc;

use coinlens::{Coinlens, CoinlensConnector, Currency, MarketChartRequest, Symbol};
use coinlens_mock::MockConnector;

/// Service backed by the fixture connector for CoinGecko.
pub fn mock_lens() -> Coinlens {
    Coinlens::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .expect("build service")
}

/// Service backed by a single arbitrary connector.
pub fn lens_with(connector: Arc<dyn CoinlensConnector>) -> Coinlens {
    Coinlens::builder()
        .with_connector(connector)
        .build()
        .expect("build service")
}

/// The five-point ETH fixture: 100, 110, 105, 115, 120.
pub fn eth_req() -> MarketChartRequest {
    MarketChartRequest::new(Symbol::Eth, Currency::Usd, 5)
}

/// `days` linear BTC points from 2023-01-01.
pub const fn btc_req(days: i64) -> MarketChartRequest {
    MarketChartRequest::new(Symbol::Btc, Currency::Usd, days)
}

/// Construct a UTC `DateTime` at midnight for readability in tests.
#[allow(dead_code)]
pub fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;
    chrono::Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// Float column values by name.
#[allow(dead_code)]
pub fn floats(table: &coinlens::TimeSeriesTable, name: &str) -> Vec<Option<f64>> {
    table
        .column(name)
        .and_then(coinlens::Column::to_f64)
        .unwrap_or_else(|| panic!("numeric column {name}"))
}

#[allow(dead_code)]
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}
