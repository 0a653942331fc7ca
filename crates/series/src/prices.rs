//! Price and return series.
//!
//! `ReturnSeries[i] = (PriceSeries[i+1] - PriceSeries[i]) / PriceSeries[i]`.

use pairquant_core::{Error, Result};
use serde::{Deserialize, Serialize};

fn check_price(price: f64) -> Result<f64> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(Error::invalid_price(format!(
            "price must be positive and finite, got {price}"
        )))
    }
}

/// Simple return between two consecutive prices.
#[inline]
pub fn simple_return(prev: f64, next: f64) -> f64 {
    (next - prev) / prev
}

/// Append-only sequence of positive prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Start a series from its first observation.
    pub fn new(initial: f64) -> Result<Self> {
        Ok(Self {
            prices: vec![check_price(initial)?],
        })
    }

    /// Build a series from a slice of observations.
    pub fn from_slice(prices: &[f64]) -> Result<Self> {
        let (first, rest) = prices
            .split_first()
            .ok_or_else(|| Error::insufficient_data("price series needs at least one price"))?;
        let mut series = Self::new(*first)?;
        for &p in rest {
            series.push(p)?;
        }
        Ok(series)
    }

    /// Append a price observation.
    pub fn push(&mut self, price: f64) -> Result<()> {
        self.prices.push(check_price(price)?);
        Ok(())
    }

    /// Most recent price. A series is never empty.
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    /// Price at period `i`.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.prices.get(i).copied()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Never true for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Observations as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }
}

/// Append-only sequence of simple per-period returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    returns: Vec<f64>,
}

impl ReturnSeries {
    /// Create an empty return series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive returns from consecutive prices.
    pub fn from_prices(prices: &PriceSeries) -> Self {
        let returns = prices
            .as_slice()
            .windows(2)
            .map(|w| simple_return(w[0], w[1]))
            .collect();
        Self { returns }
    }

    /// Append a return.
    pub fn push(&mut self, ret: f64) {
        self.returns.push(ret);
    }

    /// Number of returns.
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Whether no returns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Returns as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.returns
    }
}

impl From<Vec<f64>> for ReturnSeries {
    fn from(returns: Vec<f64>) -> Self {
        Self { returns }
    }
}

impl AsRef<[f64]> for ReturnSeries {
    fn as_ref(&self) -> &[f64] {
        &self.returns
    }
}

/// Prices and their returns, grown together so that
/// `returns.len() == prices.len() - 1` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    prices: PriceSeries,
    returns: ReturnSeries,
}

impl PriceHistory {
    /// Start a history from the first observed price.
    pub fn new(initial: f64) -> Result<Self> {
        Ok(Self {
            prices: PriceSeries::new(initial)?,
            returns: ReturnSeries::new(),
        })
    }

    /// Build a history from a slice of prices.
    pub fn from_slice(prices: &[f64]) -> Result<Self> {
        let prices = PriceSeries::from_slice(prices)?;
        let returns = ReturnSeries::from_prices(&prices);
        Ok(Self { prices, returns })
    }

    /// Append a price, recording the return from the previous one.
    ///
    /// Returns the new period's return.
    pub fn push(&mut self, price: f64) -> Result<f64> {
        let prev = self.prices.last();
        self.prices.push(price)?;
        let ret = simple_return(prev, price);
        self.returns.push(ret);
        Ok(ret)
    }

    /// Current (latest) price.
    pub fn current_price(&self) -> f64 {
        self.prices.last()
    }

    /// Price observations.
    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    /// Per-period returns.
    pub fn returns(&self) -> &ReturnSeries {
        &self.returns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_non_positive_prices() {
        assert!(matches!(PriceSeries::new(0.0), Err(Error::InvalidPrice(_))));
        assert!(matches!(PriceSeries::new(-5.0), Err(Error::InvalidPrice(_))));
        assert!(matches!(PriceSeries::new(f64::NAN), Err(Error::InvalidPrice(_))));

        let mut series = PriceSeries::new(100.0).unwrap();
        assert!(series.push(f64::INFINITY).is_err());
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_empty_slice() {
        assert!(matches!(
            PriceSeries::from_slice(&[]),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn test_returns_from_prices() {
        let prices = PriceSeries::from_slice(&[100.0, 110.0, 99.0]).unwrap();
        let returns = ReturnSeries::from_prices(&prices);

        assert_eq!(returns.len(), prices.len() - 1);
        assert_relative_eq!(returns.as_slice()[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns.as_slice()[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_history_keeps_returns_in_step() {
        let mut history = PriceHistory::new(1500.0).unwrap();
        assert!(history.returns().is_empty());

        let ret = history.push(1515.0).unwrap();
        assert_relative_eq!(ret, 0.01, epsilon = 1e-12);
        history.push(1500.0).unwrap();

        assert_eq!(history.prices().len(), 3);
        assert_eq!(history.returns().len(), 2);
        assert_eq!(history.current_price(), 1500.0);
    }

    #[test]
    fn test_history_rejected_price_leaves_state() {
        let mut history = PriceHistory::new(100.0).unwrap();
        assert!(history.push(-1.0).is_err());
        assert_eq!(history.prices().len(), 1);
        assert_eq!(history.returns().len(), 0);
    }

    #[test]
    fn test_history_matches_batch_derivation() {
        let raw = [50.0, 51.0, 49.5, 52.25];
        let mut incremental = PriceHistory::new(raw[0]).unwrap();
        for &p in &raw[1..] {
            incremental.push(p).unwrap();
        }
        assert_eq!(incremental, PriceHistory::from_slice(&raw).unwrap());
    }
}
