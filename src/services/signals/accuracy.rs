//! Prediction outcome ledger.

use crate::types::{AccuracyReport, ActionKind, OutcomeRecord};
use chrono::Utc;
use dashmap::DashMap;
use std::collections::VecDeque;
use tracing::debug;

/// Outcomes kept per symbol.
pub const MAX_OUTCOMES: usize = 100;

/// Keeps the most recent predicted/actual outcomes per symbol.
#[derive(Default)]
pub struct AccuracyTracker {
    outcomes: DashMap<String, VecDeque<OutcomeRecord>>,
}

impl AccuracyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what was predicted for a symbol and what actually happened.
    pub fn record_outcome(&self, symbol: &str, predicted: ActionKind, actual: ActionKind) {
        let mut entry = self.outcomes.entry(symbol.to_string()).or_default();
        entry.push_back(OutcomeRecord {
            predicted,
            actual,
            recorded_at: Utc::now(),
        });
        while entry.len() > MAX_OUTCOMES {
            entry.pop_front();
        }
        debug!(
            "Recorded outcome for {}: predicted {:?}, actual {:?} ({} kept)",
            symbol,
            predicted,
            actual,
            entry.len()
        );
    }

    /// Whether any outcome was ever recorded for `symbol`.
    pub fn contains(&self, symbol: &str) -> bool {
        self.outcomes.contains_key(symbol)
    }

    /// Accuracy for one symbol, or across every symbol when `None`.
    pub fn accuracy(&self, symbol: Option<&str>) -> AccuracyReport {
        let (total, correct) = match symbol {
            Some(symbol) => self
                .outcomes
                .get(symbol)
                .map(|records| tally(&records))
                .unwrap_or((0, 0)),
            None => self.outcomes.iter().fold((0, 0), |(t, c), entry| {
                let (et, ec) = tally(entry.value());
                (t + et, c + ec)
            }),
        };

        let accuracy_pct = if total > 0 {
            correct as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        AccuracyReport {
            symbol: symbol.map(str::to_string),
            total_predictions: total,
            correct_predictions: correct,
            accuracy_pct,
        }
    }
}

fn tally(records: &VecDeque<OutcomeRecord>) -> (usize, usize) {
    let correct = records.iter().filter(|r| r.is_correct()).count();
    (records.len(), correct)
}
