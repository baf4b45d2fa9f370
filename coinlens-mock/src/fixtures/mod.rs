pub mod market_chart;
