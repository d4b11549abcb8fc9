//! Weighted composite scoring of the sub-signals.

use super::rules::all_signals;
use super::{make_reading, Signal};
use crate::types::{IndicatorSet, SignalReading};
use tracing::debug;

/// Lowest confidence ever reported.
pub const MIN_CONFIDENCE: f64 = 50.0;
/// Highest confidence ever reported.
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Result of scoring one indicator snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Weight-normalized average of the sub-signal scores.
    pub weighted_score: f64,
    /// 50-95, grows with the magnitude of the weighted score.
    pub confidence: f64,
    /// 0-100.
    pub risk_score: f64,
    /// One reading per sub-signal, in scoring order.
    pub signals: Vec<SignalReading>,
}

/// Combines the weighted sub-signals into a composite score.
pub struct SignalScorer {
    signals: Vec<Box<dyn Signal>>,
}

impl Default for SignalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalScorer {
    pub fn new() -> Self {
        Self {
            signals: all_signals(),
        }
    }

    /// Score an indicator snapshot. Never fails.
    pub fn score(&self, indicators: &IndicatorSet) -> Score {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut readings = Vec::with_capacity(self.signals.len());

        for signal in &self.signals {
            let (score, explanation) = signal.evaluate(indicators);
            weighted_sum += score * signal.weight();
            total_weight += signal.weight();
            readings.push(make_reading(signal.as_ref(), score, explanation));
        }

        let weighted_score = if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.0
        };
        let confidence = confidence_for(weighted_score);
        let risk_score = risk_score(indicators);

        debug!(
            "Scored snapshot: weighted {:.4}, confidence {:.1}, risk {:.1}",
            weighted_score, confidence, risk_score
        );

        Score {
            weighted_score,
            confidence,
            risk_score,
            signals: readings,
        }
    }
}

/// Map a weighted score to a confidence percentage.
pub fn confidence_for(weighted_score: f64) -> f64 {
    (weighted_score.abs() * 15.0 + MIN_CONFIDENCE).min(MAX_CONFIDENCE)
}

/// Sum of the independent risk contributions, clamped to 0-100.
pub fn risk_score(ind: &IndicatorSet) -> f64 {
    let mut risk = (ind.volatility_pct * 10.0).min(30.0);

    if ind.trend.is_slight() {
        risk += 10.0;
    } else if !ind.trend.is_bullish() && !ind.trend.is_bearish() {
        risk += 20.0;
    }

    if ind.rsi > 70.0 || ind.rsi < 30.0 {
        risk += 15.0;
    }

    let position = ind.bollinger.position;
    if position > 80.0 || position < 20.0 {
        risk += 10.0;
    }

    risk.clamp(0.0, 100.0)
}
