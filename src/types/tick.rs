use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded price/volume observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub price: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(price: f64, volume: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            price,
            volume,
            timestamp,
        }
    }
}

/// A trade tick as delivered by a live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub symbol: String,
    pub price: f64,
    #[serde(default)]
    pub volume: f64,
    /// Feed timestamp; receive time is used when absent.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Tick {
    pub fn new(symbol: impl Into<String>, price: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            timestamp: None,
        }
    }

    /// Attach a feed timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Whether the tick carries usable numbers.
    pub fn is_valid(&self) -> bool {
        is_valid_sample(self.price, self.volume)
    }
}

/// Prices must be finite and positive, volumes finite and non-negative.
pub fn is_valid_sample(price: f64, volume: f64) -> bool {
    price.is_finite() && price > 0.0 && volume.is_finite() && volume >= 0.0
}
