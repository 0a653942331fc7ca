//! Pairs analysis over the optimal spread window.
//!
//! The spread is `returns(a) - returns(b)`, so the optimal window is where
//! `a` outperforms `b` the most: long `a`, short `b`.

use pairquant_analytics::best_window_with_sum;
use pairquant_core::{config::PairsConfig, Error, Result, TradingWindow};
use pairquant_series::SpreadSeries;
use serde::Serialize;
use tracing::{debug, warn};

use crate::stock::Stock;

/// One side of a pairs trade.
#[derive(Debug, Clone, Serialize)]
pub struct Leg {
    /// Ticker symbol.
    pub ticker: String,
    /// Price at the start of the window.
    pub entry_price: f64,
    /// Price after the last period of the window.
    pub exit_price: f64,
}

impl Leg {
    /// Price change over the window.
    pub fn price_change(&self) -> f64 {
        self.exit_price - self.entry_price
    }
}

/// Result of a pairs analysis.
#[derive(Debug, Clone, Serialize)]
pub struct PairsAnalysis {
    /// Optimal window in return periods.
    pub window: TradingWindow,
    /// Cumulative spread over the window.
    pub cumulative_spread: f64,
    /// Leg bought at entry.
    pub long: Leg,
    /// Leg sold short at entry.
    pub short: Leg,
    /// Long price change minus short price change, per unit of each.
    pub profit: f64,
    /// Profit over gross entry notional.
    pub gross_return: f64,
    /// Gross return scaled to a year of periods.
    pub annualized_return: f64,
}

impl PairsAnalysis {
    /// Whether the spread was positive anywhere. All-non-positive spreads
    /// still report the degenerate `(0, 0)` window.
    pub fn has_edge(&self) -> bool {
        self.cumulative_spread > 0.0
    }
}

fn leg(stock: &Stock, window: TradingWindow) -> Result<Leg> {
    let prices = stock.prices();
    // Return i spans prices[i] -> prices[i + 1]
    let entry_price = prices.get(window.entry);
    let exit_price = prices.get(window.exit + 1);
    match (entry_price, exit_price) {
        (Some(entry_price), Some(exit_price)) => Ok(Leg {
            ticker: stock.ticker.clone(),
            entry_price,
            exit_price,
        }),
        _ => Err(Error::insufficient_data(format!(
            "{} has no prices for window {}..={}",
            stock.ticker, window.entry, window.exit
        ))),
    }
}

/// Find the best window in the spread of `a` over `b` and price the trade.
///
/// Both stocks must have the same, non-zero number of returns.
pub fn analyze_pairs(a: &Stock, b: &Stock, config: &PairsConfig) -> Result<PairsAnalysis> {
    let (ra, rb) = (a.returns().as_slice(), b.returns().as_slice());
    if ra.len() != rb.len() {
        warn!(a = %a.ticker, b = %b.ticker, "price history mismatch, analysis rejected");
        return Err(Error::length_mismatch(ra.len(), rb.len()));
    }
    if ra.is_empty() {
        return Err(Error::insufficient_data("pairs analysis needs at least one return"));
    }

    let spread = SpreadSeries::from_returns(ra, rb)?;
    let (window, cumulative_spread) = best_window_with_sum(spread.as_slice());
    debug!(entry = window.entry, exit = window.exit, cumulative_spread, "optimal spread window");

    let long = leg(a, window)?;
    let short = leg(b, window)?;
    let profit = long.price_change() - short.price_change();
    let gross_return = profit / (long.entry_price + short.entry_price);
    let annualized_return = gross_return * config.periods_per_year / window.periods() as f64;

    Ok(PairsAnalysis {
        window,
        cumulative_spread,
        long,
        short,
        profit,
        gross_return,
        annualized_return,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn stock(ticker: &str, prices: &[f64]) -> Stock {
        let mut stock = Stock::new(ticker, prices[0]).unwrap();
        for &p in &prices[1..] {
            stock.add_price_update(p).unwrap();
        }
        stock
    }

    #[test]
    fn test_window_priced_from_history() {
        // Returns a: +10%, +10%, -10%   b: 0%, 0%, 0%
        let a = stock("AAA", &[100.0, 110.0, 121.0, 108.9]);
        let b = stock("BBB", &[50.0, 50.0, 50.0, 50.0]);

        let analysis = analyze_pairs(&a, &b, &PairsConfig::default()).unwrap();

        assert_eq!(analysis.window, TradingWindow::new(0, 1));
        assert!(analysis.has_edge());
        assert_relative_eq!(analysis.cumulative_spread, 0.2, epsilon = 1e-9);
        assert_eq!(analysis.long.ticker, "AAA");
        assert_eq!(analysis.long.entry_price, 100.0);
        assert_eq!(analysis.long.exit_price, 121.0);
        assert_eq!(analysis.short.ticker, "BBB");
        assert_relative_eq!(analysis.profit, 21.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.gross_return, 21.0 / 150.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.annualized_return, 21.0 / 150.0 * 252.0 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_edge_defaults_to_first_period() {
        let a = stock("AAA", &[100.0, 99.0, 98.0]);
        let b = stock("BBB", &[100.0, 101.0, 102.0]);

        let analysis = analyze_pairs(&a, &b, &PairsConfig::default()).unwrap();
        assert_eq!(analysis.window, TradingWindow::new(0, 0));
        assert!(!analysis.has_edge());
        assert_eq!(analysis.long.exit_price, 99.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = stock("AAA", &[100.0, 101.0, 102.0]);
        let b = stock("BBB", &[100.0, 101.0]);
        let err = analyze_pairs(&a, &b, &PairsConfig::default()).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn test_empty_history_rejected() {
        let a = stock("AAA", &[100.0]);
        let b = stock("BBB", &[100.0]);
        let err = analyze_pairs(&a, &b, &PairsConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InsufficientData(_)));
    }
}
