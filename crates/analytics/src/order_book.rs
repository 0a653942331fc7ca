//! Price-ordered limit order book.
//!
//! Bids are kept in descending price order and asks in ascending price
//! order, so the best level of each side is always at index 0. New levels
//! are placed by binary search over the side, then shifted into place.
//!
//! Mutations are not atomic across the search and shift steps; callers
//! sharing a book across threads must serialize access externally.

use ordered_float::OrderedFloat;
use pairquant_core::{config::OrderBookConfig, Price, PriceLevel, Quantity, Side, TieBreak};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Best level of each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopOfBook {
    /// Best bid, or `PriceLevel::EMPTY`.
    pub bid: PriceLevel,
    /// Best ask, or `PriceLevel::EMPTY`.
    pub ask: PriceLevel,
}

/// Two-sided order book of price levels.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Bid levels, descending by price.
    bids: Vec<PriceLevel>,
    /// Ask levels, ascending by price.
    asks: Vec<PriceLevel>,
    /// Placement among equal prices.
    tie_break: TieBreak,
}

impl OrderBook {
    /// Create an empty book with the default (newest-first) tie break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty book with an explicit tie break.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            bids: Vec::new(),
            asks: Vec::new(),
            tie_break,
        }
    }

    /// Create an empty book from configuration.
    pub fn from_config(config: &OrderBookConfig) -> Self {
        Self::with_tie_break(config.tie_break)
    }

    /// Equal-price placement policy in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn levels(&self, side: Side) -> &[PriceLevel] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn levels_mut(&mut self, side: Side) -> &mut Vec<PriceLevel> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Rank at which a level at `price` would be inserted.
    ///
    /// `NewestFirst` yields the first position whose price does not rank
    /// ahead of `price`; `OldestFirst` skips past any equal prices too.
    pub fn insertion_rank(&self, side: Side, price: f64) -> usize {
        let price: Price = OrderedFloat(price);
        let levels = self.levels(side);
        match self.tie_break {
            TieBreak::NewestFirst => levels.partition_point(|l| side.is_better(l.price, price)),
            TieBreak::OldestFirst => levels.partition_point(|l| !side.is_better(price, l.price)),
        }
    }

    /// Insert a level on `side`, returning its rank.
    ///
    /// `price` is expected to be positive.
    pub fn add(&mut self, side: Side, price: f64, quantity: Quantity) -> usize {
        let rank = self.insertion_rank(side, price);
        self.levels_mut(side).insert(rank, PriceLevel::new(price, quantity));
        trace!(?side, price, quantity, rank, "level inserted");
        rank
    }

    /// Insert a bid level, returning its rank.
    pub fn add_bid(&mut self, price: f64, quantity: Quantity) -> usize {
        self.add(Side::Bid, price, quantity)
    }

    /// Insert an ask level, returning its rank.
    pub fn add_ask(&mut self, price: f64, quantity: Quantity) -> usize {
        self.add(Side::Ask, price, quantity)
    }

    /// Remove the front-most level at exactly `price` on `side`.
    pub fn remove_level(&mut self, side: Side, price: f64) -> Option<PriceLevel> {
        let price: Price = OrderedFloat(price);
        let levels = self.levels_mut(side);
        let idx = levels.partition_point(|l| side.is_better(l.price, price));
        if levels.get(idx).is_some_and(|l| l.price == price) {
            Some(levels.remove(idx))
        } else {
            None
        }
    }

    /// Best level on `side`, or the zero sentinel when empty.
    pub fn best(&self, side: Side) -> PriceLevel {
        self.levels(side).first().copied().unwrap_or(PriceLevel::EMPTY)
    }

    /// Best (highest) bid, or the zero sentinel.
    pub fn best_bid(&self) -> PriceLevel {
        self.best(Side::Bid)
    }

    /// Best (lowest) ask, or the zero sentinel.
    pub fn best_ask(&self) -> PriceLevel {
        self.best(Side::Ask)
    }

    /// Best level of each side.
    pub fn top_of_book(&self) -> TopOfBook {
        TopOfBook {
            bid: self.best_bid(),
            ask: self.best_ask(),
        }
    }

    /// Bid levels, best first.
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Ask levels, best first.
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Up to `n` best levels of `side`.
    pub fn depth(&self, side: Side, n: usize) -> &[PriceLevel] {
        let levels = self.levels(side);
        &levels[..n.min(levels.len())]
    }

    /// Best ask minus best bid, if both sides are quoted.
    pub fn spread(&self) -> Option<f64> {
        let (bid, ask) = (self.bids.first()?, self.asks.first()?);
        Some(ask.px() - bid.px())
    }

    /// Midpoint of best bid and ask, if both sides are quoted.
    pub fn mid_price(&self) -> Option<f64> {
        let (bid, ask) = (self.bids.first()?, self.asks.first()?);
        Some((bid.px() + ask.px()) / 2.0)
    }

    /// Number of levels on `side`.
    pub fn len(&self, side: Side) -> usize {
        self.levels(side).len()
    }

    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Remove all levels.
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}
