//! Owned, append-only time series for the pairquant system.
//!
//! This crate handles:
//! - Price series with positive-price validation
//! - Simple per-period returns derived from prices
//! - Spread series built from two aligned return series

pub mod prices;
pub mod spread;

pub use prices::{PriceHistory, PriceSeries, ReturnSeries};
pub use spread::SpreadSeries;
