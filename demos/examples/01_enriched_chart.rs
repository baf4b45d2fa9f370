use std::fmt::Write as _;

use coinlens::{
    Coinlens, CoinlensError, Currency, EnrichOptions, Frequency, MarketChartRequest, PlotRequest,
    Symbol, TableResponse, renderer_fn,
};
use coinlens_demos::common::{get_connector, print_tail};

/// Stand-in renderer: encodes the chart as CSV text instead of an image.
fn csv_renderer(req: &PlotRequest) -> Result<Vec<u8>, CoinlensError> {
    let table = TableResponse::from(&req.table);
    let mut out = format!("# {}\n# {}\n{}\n", req.title, req.subtitle, table.columns.join(","));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "{}", cells.join(","))
            .map_err(|e| CoinlensError::Other(format!("csv write failed: {e}")))?;
    }
    Ok(out.into_bytes())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lens = Coinlens::builder().with_connector(get_connector()?).build()?;
    let req = MarketChartRequest::new(Symbol::Btc, Currency::Eur, 60);
    let options = EnrichOptions::new()
        .window_size(7)
        .volatility_window(14)
        .normalize_base(100.0);

    let stats = lens.stats(&req).await?;
    println!(
        "{} days of BTC/EUR: min={:.2} max={:.2} mean={:.2} change={:.2}%",
        stats.count, stats.min_price, stats.max_price, stats.mean_price, stats.percent_change
    );

    let table = lens.enriched_chart(&req, &options).await?;
    print_tail(&table, 5);

    let plot = lens
        .plot_request(&req, &options, Some(Frequency::Weekly))
        .await?;
    println!("{}", plot.title);
    println!("{}", plot.subtitle);
    if let Some(overlay) = &plot.overlay {
        println!("weekly overlay rows: {}", overlay.row_count());
    }

    let bytes = lens
        .render(&req, &options, Some(Frequency::Weekly), &renderer_fn(csv_renderer))
        .await?;
    println!("rendered {} bytes", bytes.len());

    Ok(())
}
