//! Portfolio risk figures derived from per-asset volatilities.

use pairquant_core::{Error, Result};
use serde::Serialize;

use crate::stock::Stock;

/// Root-sum-of-squares of asset volatilities.
///
/// Treats the assets as uncorrelated; no covariance term is applied.
pub fn portfolio_volatility(volatilities: &[f64]) -> f64 {
    volatilities.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Weights proportional to `1 / volatility`, summing to one.
pub fn inverse_volatility_weights(volatilities: &[f64]) -> Result<Vec<f64>> {
    if volatilities.is_empty() {
        return Err(Error::insufficient_data("no volatilities to weight"));
    }
    if let Some(bad) = volatilities.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(Error::invalid_volatility(format!(
            "volatility must be positive and finite, got {bad}"
        )));
    }

    let inverse: Vec<f64> = volatilities.iter().map(|v| 1.0 / v).collect();
    let total: f64 = inverse.iter().sum();
    Ok(inverse.into_iter().map(|w| w / total).collect())
}

/// Risk figures for a set of stocks.
#[derive(Debug, Clone, Serialize)]
pub struct RiskSummary {
    /// Root-sum-of-squares volatility.
    pub portfolio_volatility: f64,
    /// Inverse-volatility weight per ticker.
    pub weights: Vec<(String, f64)>,
}

impl RiskSummary {
    /// Build from the stocks' last volatility estimates.
    pub fn from_stocks(stocks: &[&Stock]) -> Result<Self> {
        let vols: Vec<f64> = stocks.iter().map(|s| s.volatility()).collect();
        let weights = inverse_volatility_weights(&vols)?;
        Ok(Self {
            portfolio_volatility: portfolio_volatility(&vols),
            weights: stocks
                .iter()
                .map(|s| s.ticker.clone())
                .zip(weights)
                .collect(),
        })
    }
}
