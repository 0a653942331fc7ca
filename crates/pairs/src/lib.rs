//! Pairs-trading analysis for the pairquant system.
//!
//! This crate provides:
//! - Stocks with append-only price/return history
//! - Pairs analysis over the optimal spread window
//! - Portfolio volatility and inverse-volatility weighting
//! - Console report formatting

pub mod stock;
pub mod analysis;
pub mod risk;
pub mod report;

pub use stock::Stock;
pub use analysis::{analyze_pairs, Leg, PairsAnalysis};
pub use risk::{inverse_volatility_weights, portfolio_volatility, RiskSummary};
pub use report::TopOfBookLine;
