//! Core types and configuration for the pairquant system.
//!
//! This crate provides shared types used across all other crates:
//! - Price levels, book sides and trading windows
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
