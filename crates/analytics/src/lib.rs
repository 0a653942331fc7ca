//! Analytics primitives for the pairquant system.
//!
//! This crate handles:
//! - Windowed volatility of a return series (fixed, sliding and streaming)
//! - Price-ordered two-sided order book with binary-search insertion
//! - Maximum cumulative spread window detection for pairs trades

pub mod volatility;
pub mod order_book;
pub mod spread_window;

pub use volatility::{rolling_volatility, sliding_volatility, RollingVolatility, VolatilityEstimator};
pub use order_book::{OrderBook, TopOfBook};
pub use spread_window::{best_window, best_window_with_sum};
