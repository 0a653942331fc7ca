//! Console report formatting.

use std::fmt;

use pairquant_analytics::TopOfBook;

use crate::{analysis::PairsAnalysis, risk::RiskSummary, stock::Stock};

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8}Price: {:<10.2}Volatility: {:<10.6}Returns: {} days",
            self.ticker,
            self.current_price(),
            self.volatility(),
            self.returns().len()
        )
    }
}

/// Single-line rendering of the best bid and ask prices.
pub struct TopOfBookLine<'a>(pub &'a TopOfBook);

impl fmt::Display for TopOfBookLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Top Bid: {}, Top Ask: {}", self.0.bid.px(), self.0.ask.px())
    }
}

impl fmt::Display for PairsAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== PAIRS TRADING ANALYSIS ===")?;
        writeln!(f, "Stocks: {} vs {}", self.long.ticker, self.short.ticker)?;
        writeln!(
            f,
            "Optimal trade window: Day {} to Day {}",
            self.window.entry, self.window.exit
        )?;
        writeln!(
            f,
            "Strategy: Buy {} (@ {:.2}), Short {} (@ {:.2})",
            self.long.ticker, self.long.entry_price, self.short.ticker, self.short.entry_price
        )?;
        writeln!(
            f,
            "Exit: Sell {} (@ {:.2}), Cover {} (@ {:.2})",
            self.long.ticker, self.long.exit_price, self.short.ticker, self.short.exit_price
        )?;
        writeln!(f, "Potential Profit: {:.4}", self.profit)?;
        write!(f, "Annualized Return: {:.2}%", self.annualized_return * 100.0)
    }
}

impl fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== RISK ANALYSIS ===")?;
        writeln!(
            f,
            "Estimated Portfolio Volatility: {:.4}%",
            self.portfolio_volatility * 100.0
        )?;
        let weights: Vec<String> = self
            .weights
            .iter()
            .map(|(ticker, w)| format!("{ticker}: {:.2}%", w * 100.0))
            .collect();
        write!(f, "Optimal Weights: {}", weights.join(", "))
    }
}
