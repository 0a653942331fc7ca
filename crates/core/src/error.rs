//! Error types for the pairquant system.
//!
//! The analytics primitives never fail; these errors are raised by the
//! layers that build series, load configuration and size positions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pairquant system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Price is not a positive finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Two series that must be aligned have different lengths.
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Insufficient data for computation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Volatility unusable for weighting (zero, negative or not finite).
    #[error("Invalid volatility: {0}")]
    InvalidVolatility(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid price error.
    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Error::InvalidPrice(msg.into())
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Error::LengthMismatch { left, right }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Error::InsufficientData(msg.into())
    }

    /// Create an invalid volatility error.
    pub fn invalid_volatility(msg: impl Into<String>) -> Self {
        Error::InvalidVolatility(msg.into())
    }
}
