use chrono::{Duration, Utc};
use coinlens::{Coinlens, Currency, EnrichOptions, Frequency, MarketChartRequest, Symbol};
use coinlens_demos::common::{get_connector, print_tail};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lens = Coinlens::builder().with_connector(get_connector()?).build()?;
    let req = MarketChartRequest::new(Symbol::Btc, Currency::Usd, 90);

    let weekly = EnrichOptions::new()
        .frequency(Frequency::Weekly)
        .window_size(4);
    let table = lens.enriched_table(&req, &weekly).await?;
    println!("weekly buckets: {}", table.rows.len());
    println!("columns: {}", table.columns.join(", "));

    let monthly = EnrichOptions::new().frequency(Frequency::Monthly);
    let table = lens.enriched_chart(&req, &monthly).await?;
    print_tail(&table, 3);

    // A start bound after the last point leaves no rows; the pipeline reports
    // that as a computation failure.
    let future = Utc::now() + Duration::days(365);
    let trimmed = EnrichOptions::new().start(future);
    match lens.enriched_chart(&req, &trimmed).await {
        Ok(t) => println!("trimmed rows: {}", t.row_count()),
        Err(e) => println!("trim failed ({:?}): {e}", e.kind()),
    }

    Ok(())
}
