pub mod enriched;
pub mod market_chart;
pub mod plot;
pub mod stats;

pub mod util;
