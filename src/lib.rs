//! Augur - Real-time technical-analysis signals for streaming trade ticks

pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AugurError, Result};
pub use services::{MarketAggregator, PredictionService};
pub use types::*;
