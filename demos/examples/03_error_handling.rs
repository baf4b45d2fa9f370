use coinlens::{Coinlens, Currency, MarketChartRequest, Provider, Symbol};
use coinlens_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lens = Coinlens::builder().with_connector(get_connector()?).build()?;

    let cases = [
        ("zero days", MarketChartRequest::new(Symbol::Btc, Currency::Usd, 0)),
        (
            "provider without connector",
            MarketChartRequest::new(Symbol::Eth, Currency::Usd, 7).with_provider(Provider::Kraken),
        ),
        ("possibly empty series", MarketChartRequest::new(Symbol::Xrp, Currency::Chf, 1)),
    ];

    for (label, req) in cases {
        match lens.stats(&req).await {
            Ok(stats) => println!("{label}: {} points", stats.count),
            Err(e) => println!(
                "{label}: {:?} error (actionable: {}): {e}",
                e.kind(),
                e.is_actionable()
            ),
        }
    }

    Ok(())
}
