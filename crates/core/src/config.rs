//! Configuration structures for the pairquant system.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::TieBreak;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Volatility estimation configuration.
    pub volatility: VolatilityConfig,
    /// Order book configuration.
    pub order_book: OrderBookConfig,
    /// Pairs analysis configuration.
    pub pairs: PairsConfig,
}

impl Config {
    /// Parse and validate a configuration from JSON. Missing sections and
    /// fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.volatility.window == 0 {
            return Err(Error::config("volatility.window must be at least 1"));
        }
        let ppy = self.pairs.periods_per_year;
        if !ppy.is_finite() || ppy <= 0.0 {
            return Err(Error::config(format!(
                "pairs.periods_per_year must be positive, got {ppy}"
            )));
        }
        Ok(())
    }
}

/// How the volatility window is applied to a return series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityMode {
    /// One statistic over the first `window` returns.
    #[default]
    Fixed,
    /// One statistic per window offset.
    Sliding,
}

/// Volatility estimation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Window length in periods.
    pub window: usize,
    /// Window application mode.
    pub mode: VolatilityMode,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            window: 20,
            mode: VolatilityMode::Fixed,
        }
    }
}

/// Order book configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBookConfig {
    /// Equal-price placement policy.
    pub tie_break: TieBreak,
}

/// Pairs analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsConfig {
    /// Periods per year used to annualize returns (252 trading days).
    pub periods_per_year: f64,
}

impl Default for PairsConfig {
    fn default() -> Self {
        Self {
            periods_per_year: 252.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.volatility.window, 20);
        assert_eq!(config.volatility.mode, VolatilityMode::Fixed);
        assert_eq!(config.order_book.tie_break, TieBreak::NewestFirst);
        assert_eq!(config.pairs.periods_per_year, 252.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json_str(
            r#"{"volatility": {"window": 30, "mode": "sliding"}, "order_book": {"tie_break": "oldest_first"}}"#,
        )
        .unwrap();
        assert_eq!(config.volatility.window, 30);
        assert_eq!(config.volatility.mode, VolatilityMode::Sliding);
        assert_eq!(config.order_book.tie_break, TieBreak::OldestFirst);
        assert_eq!(config.pairs.periods_per_year, 252.0);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = Config::from_json_str(r#"{"volatility": {"window": 0}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_bad_periods_rejected() {
        let err = Config::from_json_str(r#"{"pairs": {"periods_per_year": -1.0}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
