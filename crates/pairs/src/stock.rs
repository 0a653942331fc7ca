//! A stock with its price history and last volatility estimate.

use pairquant_analytics::VolatilityEstimator;
use pairquant_core::Result;
use pairquant_series::{PriceHistory, PriceSeries, ReturnSeries};

/// A traded instrument and its observed history.
#[derive(Debug, Clone)]
pub struct Stock {
    /// Ticker symbol.
    pub ticker: String,
    history: PriceHistory,
    volatility: f64,
}

impl Stock {
    /// Create a stock from its first observed price.
    pub fn new(ticker: impl Into<String>, initial_price: f64) -> Result<Self> {
        Ok(Self {
            ticker: ticker.into(),
            history: PriceHistory::new(initial_price)?,
            volatility: 0.0,
        })
    }

    /// Record a new price, returning the period return.
    pub fn add_price_update(&mut self, price: f64) -> Result<f64> {
        self.history.push(price)
    }

    /// Latest price.
    pub fn current_price(&self) -> f64 {
        self.history.current_price()
    }

    pub fn prices(&self) -> &PriceSeries {
        self.history.prices()
    }

    pub fn returns(&self) -> &ReturnSeries {
        self.history.returns()
    }

    /// Last computed volatility (0.0 until estimated).
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Re-estimate volatility from the current returns and store it.
    pub fn update_volatility(&mut self, estimator: &VolatilityEstimator) -> f64 {
        self.volatility = estimator.estimate(self.returns().as_slice());
        self.volatility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pairquant_core::config::VolatilityMode;

    #[test]
    fn test_price_updates() {
        let mut stock = Stock::new("INFY", 1500.0).unwrap();
        let ret = stock.add_price_update(1530.0).unwrap();

        assert_relative_eq!(ret, 0.02, epsilon = 1e-12);
        assert_eq!(stock.current_price(), 1530.0);
        assert_eq!(stock.prices().len(), 2);
        assert_eq!(stock.returns().len(), 1);
    }

    #[test]
    fn test_invalid_price() {
        assert!(Stock::new("TCS", 0.0).is_err());
        let mut stock = Stock::new("TCS", 3800.0).unwrap();
        assert!(stock.add_price_update(-1.0).is_err());
        assert_eq!(stock.returns().len(), 0);
    }

    #[test]
    fn test_update_volatility() {
        let mut stock = Stock::new("INFY", 100.0).unwrap();
        let estimator = VolatilityEstimator::new(2, VolatilityMode::Fixed);

        assert_eq!(stock.update_volatility(&estimator), 0.0);

        stock.add_price_update(110.0).unwrap();
        stock.add_price_update(99.0).unwrap();
        // Returns +10% and -10%: mean 0, std 0.1
        assert_relative_eq!(stock.update_volatility(&estimator), 0.1, epsilon = 1e-12);
        assert_relative_eq!(stock.volatility(), 0.1, epsilon = 1e-12);
    }
}
