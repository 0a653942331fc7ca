//! Spread series between two aligned return series.

use pairquant_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Per-period return difference `a[i] - b[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadSeries {
    spread: Vec<f64>,
}

impl SpreadSeries {
    /// Build a spread from two return series.
    ///
    /// Series of different lengths are rejected rather than truncated or padded.
    pub fn from_returns(a: &[f64], b: &[f64]) -> Result<Self> {
        if a.len() != b.len() {
            warn!(left = a.len(), right = b.len(), "return series length mismatch");
            return Err(Error::length_mismatch(a.len(), b.len()));
        }
        let spread = a.iter().zip(b).map(|(x, y)| x - y).collect();
        Ok(Self { spread })
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.spread.len()
    }

    /// Whether the spread has no periods.
    pub fn is_empty(&self) -> bool {
        self.spread.is_empty()
    }

    /// Spread values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.spread
    }
}

impl AsRef<[f64]> for SpreadSeries {
    fn as_ref(&self) -> &[f64] {
        &self.spread
    }
}
