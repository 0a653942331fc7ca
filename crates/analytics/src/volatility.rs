//! Windowed volatility computation.
//!
//! Computes the population standard deviation of simple returns as
//! `sqrt(max(E[x^2] - E[x]^2, 0))`. Volatility is per period, not annualized.

use std::collections::VecDeque;

use pairquant_core::config::{VolatilityConfig, VolatilityMode};
use tracing::debug;

/// Population standard deviation from running sums over `n` values.
#[inline]
fn std_from_sums(sum: f64, sum_sq: f64, n: usize) -> f64 {
    let n_f = n as f64;
    let mean = sum / n_f;
    let variance = (sum_sq / n_f) - (mean * mean);

    // Cancellation can push variance slightly below zero
    variance.max(0.0).sqrt()
}

/// Volatility over the first `window` returns only.
///
/// Returns `0.0` when fewer than `window` returns are available or when
/// `window` is zero.
pub fn rolling_volatility(returns: &[f64], window: usize) -> f64 {
    if window == 0 || returns.len() < window {
        debug!(len = returns.len(), window, "insufficient data for volatility window");
        return 0.0;
    }

    let (sum, sum_sq) = returns[..window]
        .iter()
        .fold((0.0, 0.0), |(s, sq), &r| (s + r, sq + r * r));

    std_from_sums(sum, sum_sq, window)
}

/// Volatility at every window offset.
///
/// Element `i` covers `returns[i..i + window]`, so the output holds
/// `len - window + 1` values, or none when data is insufficient.
pub fn sliding_volatility(returns: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || returns.len() < window {
        debug!(len = returns.len(), window, "insufficient data for sliding volatility");
        return Vec::new();
    }

    let mut out = Vec::with_capacity(returns.len() - window + 1);
    let (mut sum, mut sum_sq) = returns[..window]
        .iter()
        .fold((0.0, 0.0), |(s, sq), &r| (s + r, sq + r * r));
    out.push(std_from_sums(sum, sum_sq, window));

    for i in window..returns.len() {
        let old = returns[i - window];
        let new = returns[i];
        sum += new - old;
        sum_sq += new * new - old * old;
        out.push(std_from_sums(sum, sum_sq, window));
    }

    out
}

/// Config-driven volatility estimator.
#[derive(Debug, Clone, Copy)]
pub struct VolatilityEstimator {
    window: usize,
    mode: VolatilityMode,
}

impl VolatilityEstimator {
    /// Create an estimator with an explicit window and mode.
    pub fn new(window: usize, mode: VolatilityMode) -> Self {
        Self { window, mode }
    }

    /// Create an estimator from configuration.
    pub fn from_config(config: &VolatilityConfig) -> Self {
        Self::new(config.window, config.mode)
    }

    /// Window length in periods.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Single volatility figure for a return series.
    ///
    /// `Fixed` uses the first window; `Sliding` reports the most recent
    /// window. Both yield `0.0` on insufficient data.
    pub fn estimate(&self, returns: &[f64]) -> f64 {
        match self.mode {
            VolatilityMode::Fixed => rolling_volatility(returns, self.window),
            VolatilityMode::Sliding => {
                if self.window == 0 || returns.len() < self.window {
                    return 0.0;
                }
                let tail = &returns[returns.len() - self.window..];
                rolling_volatility(tail, self.window)
            }
        }
    }

    /// Volatility at every window offset.
    pub fn series(&self, returns: &[f64]) -> Vec<f64> {
        sliding_volatility(returns, self.window)
    }
}

/// Streaming volatility over the most recent `window` returns.
pub struct RollingVolatility {
    /// Window size in periods.
    window: usize,
    /// Recent returns.
    returns: VecDeque<f64>,
    /// Previous price (for computing next return).
    prev_price: Option<f64>,
    /// Running sum of returns (for mean).
    sum: f64,
    /// Running sum of squared returns (for variance).
    sum_sq: f64,
}

impl RollingVolatility {
    /// Create a new streaming volatility calculator.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            returns: VecDeque::with_capacity(window),
            prev_price: None,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Add a price observation.
    ///
    /// Non-positive prices are skipped and do not become the reference
    /// for the next return. Returns the current volatility if the window is full.
    pub fn add_price(&mut self, price: f64) -> Option<f64> {
        if price.is_nan() || price <= 0.0 {
            debug!(price, "skipping non-positive price");
            return self.volatility();
        }
        if let Some(prev) = self.prev_price {
            self.add_return((price - prev) / prev);
        }
        self.prev_price = Some(price);
        self.volatility()
    }

    /// Add a simple return directly.
    pub fn add_return(&mut self, ret: f64) {
        if self.window == 0 {
            return;
        }

        // If window is full, remove oldest
        if self.returns.len() >= self.window {
            if let Some(old) = self.returns.pop_front() {
                self.sum -= old;
                self.sum_sq -= old * old;
            }
        }

        self.returns.push_back(ret);
        self.sum += ret;
        self.sum_sq += ret * ret;
    }

    /// Volatility of the current window, `None` until it is full.
    pub fn volatility(&self) -> Option<f64> {
        if !self.is_ready() {
            return None;
        }
        Some(std_from_sums(self.sum, self.sum_sq, self.returns.len()))
    }

    /// Check if the window is full.
    pub fn is_ready(&self) -> bool {
        self.window > 0 && self.returns.len() >= self.window
    }

    /// Get the number of observations.
    pub fn count(&self) -> usize {
        self.returns.len()
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.returns.clear();
        self.prev_price = None;
        self.sum = 0.0;
        self.sum_sq = 0.0;
    }
}
