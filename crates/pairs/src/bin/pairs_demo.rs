//! Pairs analysis demo over two deterministic, correlated price paths.
//!
//! Usage: `pairs-demo [CONFIG_JSON]`. Set `RUST_LOG=debug` for decision logs.

use anyhow::Context;
use pairquant_analytics::{OrderBook, VolatilityEstimator};
use pairquant_core::Config;
use pairquant_pairs::{analyze_pairs, RiskSummary, Stock, TopOfBookLine};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DAYS: u32 = 100;

/// Percent moves for day `day`: a bounded oscillation for the first leg
/// and the same move plus a smaller, out-of-phase term for the second.
fn daily_moves(day: u32) -> (f64, f64) {
    let t = day as f64;
    let a = 0.5 * (t * 0.7).sin();
    let b = a + 0.2 * (t * 1.3).cos();
    (a, b)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => Config::from_json_str(&json).context("invalid configuration argument")?,
        None => Config::default(),
    };
    info!(window = config.volatility.window, mode = ?config.volatility.mode, "starting pairs demo");

    let mut infy = Stock::new("INFY", 1500.0)?;
    let mut tcs = Stock::new("TCS", 3800.0)?;
    for day in 1..=DAYS {
        let (a, b) = daily_moves(day);
        infy.add_price_update(infy.current_price() * (1.0 + a / 100.0))?;
        tcs.add_price_update(tcs.current_price() * (1.0 + b / 100.0))?;
    }

    let estimator = VolatilityEstimator::from_config(&config.volatility);
    infy.update_volatility(&estimator);
    tcs.update_volatility(&estimator);

    println!("--- VOLATILITY ANALYSIS ---");
    println!("{infy}");
    println!("{tcs}");

    let mut book = OrderBook::from_config(&config.order_book);
    book.add_bid(18000.50, 100);
    book.add_bid(18000.25, 150);
    book.add_bid(18001.00, 75);

    println!("\n--- ORDER BOOK SIMULATION ---");
    println!("{}", TopOfBookLine(&book.top_of_book()));

    let analysis = analyze_pairs(&infy, &tcs, &config.pairs).context("pairs analysis failed")?;
    println!("\n{analysis}");

    let risk = RiskSummary::from_stocks(&[&infy, &tcs]).context("risk analysis failed")?;
    println!("\n{risk}");

    Ok(())
}
