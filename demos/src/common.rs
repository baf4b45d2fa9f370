use std::sync::Arc;

use coinlens::{CoinlensConnector, CoinlensError, TimeSeriesTable};

/// Environment variable that switches the demos to the fixture connector.
pub const USE_MOCK_ENV: &str = "COINLENS_DEMOS_USE_MOCK";

/// Return a connector for demos.
///
/// # Errors
/// Returns `Other` if the CoinGecko HTTP client cannot be constructed.
pub fn get_connector() -> Result<Arc<dyn CoinlensConnector>, CoinlensError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(coinlens_mock::MockConnector::new()))
    } else {
        let mut builder = coinlens_coingecko::CoinGeckoConnector::builder();
        if let Ok(key) = std::env::var("COINGECKO_PRO_API_KEY") {
            builder = builder.api_key(key);
        }
        Ok(Arc::new(builder.build()?))
    }
}

/// Print the last `n` rows of a table, one line per row.
pub fn print_tail(table: &TimeSeriesTable, n: usize) {
    let response = coinlens::TableResponse::from(table);
    println!("{}", response.columns.join(" | "));
    let skip = response.rows.len().saturating_sub(n);
    for row in response.rows.iter().skip(skip) {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", cells.join(" | "));
    }
}
