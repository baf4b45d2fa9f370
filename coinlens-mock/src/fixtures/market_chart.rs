use chrono::{DateTime, Days, NaiveDate, Utc};
use coinlens_core::{Currency, MarketChartData, PricePoint, Symbol};

/// First fixture day for the linear `BTC` series (2023-01-01, midnight UTC).
pub const FIXTURE_START: (i32, u32, u32) = (2023, 1, 1);
/// Upper bound on generated points for the linear series.
pub const FIXTURE_MAX_DAYS: u32 = 3650;
/// Daily `ETH` prices starting 2025-11-17.
pub const ETH_FIXTURE_PRICES: [f64; 5] = [100.0, 110.0, 105.0, 115.0, 120.0];

pub fn by_symbol(symbol: Symbol, currency: Currency, days: u32) -> MarketChartData {
    let points = match symbol {
        Symbol::Btc => linear(FIXTURE_START, days.min(FIXTURE_MAX_DAYS)),
        Symbol::Eth => daily((2025, 11, 17), &ETH_FIXTURE_PRICES),
        Symbol::Xrp => Vec::new(),
    };
    MarketChartData {
        symbol,
        currency,
        points,
    }
}

fn day(start: (i32, u32, u32), offset: u32) -> DateTime<Utc> {
    let (y, m, d) = start;
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.checked_add_days(Days::new(u64::from(offset))))
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn linear(start: (i32, u32, u32), count: u32) -> Vec<PricePoint> {
    (0..count)
        .map(|i| PricePoint::new(day(start, i), 100.0 + 10.0 * f64::from(i)))
        .collect()
}

fn daily(start: (i32, u32, u32), prices: &[f64]) -> Vec<PricePoint> {
    (0u32..)
        .zip(prices)
        .map(|(i, &p)| PricePoint::new(day(start, i), p))
        .collect()
}
