use coinlens::{Coinlens, Currency, EnrichOptions, MarketChartRequest, Symbol};
use coinlens_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,coinlens=trace,coinlens_coingecko=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let lens = Coinlens::builder().with_connector(get_connector()?).build()?;
    let req = MarketChartRequest::new(Symbol::Btc, Currency::Usd, 30);

    let _ = lens.market_chart(&req).await?;
    let _ = lens.stats(&req).await?;
    let options = EnrichOptions::new().window_size(7).volatility_window(7);
    let _ = lens.enriched_chart(&req, &options).await?;

    Ok(())
}
