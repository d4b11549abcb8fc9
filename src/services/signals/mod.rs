//! Trading signals service module.
//!
//! Provides technical indicator calculations, weighted composite scoring,
//! price targets and prediction accuracy tracking.

pub mod accuracy;
pub mod indicators;
pub mod rules;
pub mod scorer;
pub mod targets;

pub use accuracy::AccuracyTracker;
pub use indicators::{IndicatorCalculator, MIN_SAMPLES};
pub use scorer::{Score, SignalScorer};
pub use targets::TargetCalculator;

use crate::types::{IndicatorSet, SignalCategory, SignalReading};

/// Trait for a weighted sub-signal of the composite score.
pub trait Signal: Send + Sync {
    /// Unique identifier for this sub-signal.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Category this sub-signal belongs to.
    fn category(&self) -> SignalCategory;

    /// Weight in the composite score.
    fn weight(&self) -> f64;

    /// Score the indicator snapshot, roughly -1.5 to +1.5, with a reason.
    fn evaluate(&self, indicators: &IndicatorSet) -> (f64, String);
}

/// Helper to create a SignalReading.
pub fn make_reading(signal: &dyn Signal, score: f64, explanation: String) -> SignalReading {
    SignalReading {
        id: signal.id().to_string(),
        name: signal.name().to_string(),
        category: signal.category(),
        score,
        weight: signal.weight(),
        explanation,
    }
}
