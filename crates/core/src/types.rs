//! Core data types for the pairquant system.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Price type with ordering support.
pub type Price = OrderedFloat<f64>;

/// Resting quantity at a price level.
pub type Quantity = u64;

/// A single quoted price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Level price.
    pub price: Price,
    /// Quantity resting at this price.
    pub quantity: Quantity,
}

impl PriceLevel {
    /// Zero-valued level reported for an empty book side.
    pub const EMPTY: PriceLevel = PriceLevel {
        price: OrderedFloat(0.0),
        quantity: 0,
    };

    /// Create a new price level.
    #[inline]
    pub fn new(price: f64, quantity: Quantity) -> Self {
        Self {
            price: OrderedFloat(price),
            quantity,
        }
    }

    /// Raw price as f64.
    #[inline]
    pub fn px(&self) -> f64 {
        self.price.0
    }

    /// Is this the empty-side sentinel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// Order book side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Buy quotes, best (highest) price first.
    Bid,
    /// Sell quotes, best (lowest) price first.
    Ask,
}

impl Side {
    /// Does `candidate` rank strictly ahead of `existing` on this side?
    #[inline]
    pub fn is_better(self, candidate: Price, existing: Price) -> bool {
        match self {
            Side::Bid => candidate > existing,
            Side::Ask => candidate < existing,
        }
    }
}

/// Placement of a new level relative to existing levels at the same price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// New level goes ahead of existing equal-priced levels (LIFO).
    #[default]
    NewestFirst,
    /// New level goes behind existing equal-priced levels (FIFO).
    OldestFirst,
}

/// Contiguous index range into a spread series, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TradingWindow {
    /// First period of the window.
    pub entry: usize,
    /// Last period of the window.
    pub exit: usize,
}

impl TradingWindow {
    /// Create a new window. `entry` must not exceed `exit`.
    #[inline]
    pub fn new(entry: usize, exit: usize) -> Self {
        debug_assert!(entry <= exit, "window entry {entry} after exit {exit}");
        Self { entry, exit }
    }

    /// Number of periods covered.
    #[inline]
    pub fn periods(&self) -> usize {
        self.exit - self.entry + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_level_sentinel() {
        let level = PriceLevel::EMPTY;
        assert_eq!(level.px(), 0.0);
        assert_eq!(level.quantity, 0);
        assert!(level.is_empty());
        assert!(!PriceLevel::new(18000.5, 100).is_empty());
    }

    #[test]
    fn test_side_ranking() {
        let hi = OrderedFloat(101.0);
        let lo = OrderedFloat(100.0);
        assert!(Side::Bid.is_better(hi, lo));
        assert!(!Side::Bid.is_better(lo, hi));
        assert!(Side::Ask.is_better(lo, hi));
        assert!(!Side::Ask.is_better(hi, hi));
    }

    #[test]
    fn test_window_periods() {
        assert_eq!(TradingWindow::default().periods(), 1);
        assert_eq!(TradingWindow::new(2, 5).periods(), 4);
    }

    #[test]
    fn test_default_tie_break() {
        assert_eq!(TieBreak::default(), TieBreak::NewestFirst);
    }
}
