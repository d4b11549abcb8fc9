//! Per-symbol tick registry and the query surface over it.

use crate::config::Config;
use crate::error::{AugurError, Result};
use crate::services::history::SymbolHistory;
use crate::services::market::MarketAggregator;
use crate::services::signals::{
    AccuracyTracker, IndicatorCalculator, SignalScorer, TargetCalculator, MIN_SAMPLES,
};
use crate::services::statistics::symbol_statistics;
use crate::types::{
    is_valid_sample, AccuracyReport, Action, ActionKind, Alert, AnalysisReport, IndicatorSet,
    MarketSummary, Prediction, Sample, SymbolStats, Tick,
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Build a prediction from an already computed indicator snapshot.
pub fn build_prediction(scorer: &SignalScorer, symbol: &str, indicators: IndicatorSet) -> Prediction {
    let score = scorer.score(&indicators);
    let action = Action::decide(score.weighted_score, score.risk_score);
    let targets = TargetCalculator::targets(&indicators, action.kind());

    Prediction {
        symbol: symbol.to_string(),
        action,
        action_kind: action.kind(),
        confidence: score.confidence,
        risk_score: score.risk_score,
        weighted_score: score.weighted_score,
        recommendation: action.recommendation().to_string(),
        explanation: action.explanation().to_string(),
        signals: score.signals,
        targets,
        timestamp: indicators.as_of,
        indicators,
    }
}

/// Owns every symbol's rolling history and answers prediction queries.
///
/// Writers for one symbol are serialized by the map's per-entry lock; readers
/// copy the window out and compute without holding any lock.
pub struct PredictionService {
    config: Config,
    histories: DashMap<String, SymbolHistory>,
    scorer: SignalScorer,
    accuracy: AccuracyTracker,
}

impl PredictionService {
    pub fn new(config: Config) -> Arc<Self> {
        info!(
            "Prediction service started (history size {})",
            config.history_size
        );
        Arc::new(Self {
            config,
            histories: DashMap::new(),
            scorer: SignalScorer::new(),
            accuracy: AccuracyTracker::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Record a tick. Invalid numbers are dropped with a warning.
    ///
    /// A missing timestamp is replaced with the receive time. Returns
    /// whether the tick was appended.
    pub fn record_tick(
        &self,
        symbol: &str,
        price: f64,
        volume: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> bool {
        if !is_valid_sample(price, volume) {
            warn!(
                "Dropping invalid tick for {}: price {}, volume {}",
                symbol, price, volume
            );
            return false;
        }

        let sample = Sample::new(price, volume, timestamp.unwrap_or_else(Utc::now));
        let capacity = self.config.history_size;

        self.histories
            .entry(symbol.to_string())
            .or_insert_with(|| {
                debug!("Registered new symbol {}", symbol);
                SymbolHistory::new(capacity)
            })
            .append(sample);
        true
    }

    pub fn record(&self, tick: Tick) -> bool {
        self.record_tick(&tick.symbol, tick.price, tick.volume, tick.timestamp)
    }

    /// Copy of a symbol's current window; empty for an unseen symbol.
    fn snapshot(&self, symbol: &str) -> Vec<Sample> {
        self.histories
            .get(symbol)
            .map(|h| h.snapshot())
            .unwrap_or_default()
    }

    pub fn indicators(&self, symbol: &str) -> Result<IndicatorSet> {
        IndicatorCalculator::compute(symbol, &self.snapshot(symbol))
    }

    pub fn predict(&self, symbol: &str) -> Result<Prediction> {
        let indicators = self.indicators(symbol)?;
        let prediction = build_prediction(&self.scorer, symbol, indicators);
        debug!(
            "Prediction for {}: {:?} (confidence {:.1}, risk {:.1})",
            symbol, prediction.action, prediction.confidence, prediction.risk_score
        );
        Ok(prediction)
    }

    pub fn statistics(&self, symbol: &str) -> Option<SymbolStats> {
        symbol_statistics(symbol, &self.snapshot(symbol))
    }

    /// Predictions for every symbol past warm-up, in symbol order.
    fn all_predictions(&self) -> Vec<Prediction> {
        self.symbols()
            .iter()
            .filter_map(|symbol| self.predict(symbol).ok())
            .collect()
    }

    pub fn opportunities(&self, min_confidence: f64, limit: usize) -> Vec<Prediction> {
        MarketAggregator::top_opportunities(
            &self.all_predictions(),
            min_confidence,
            self.config.opportunities.max_risk,
            limit,
        )
    }

    /// Opportunities with the configured confidence floor and limit.
    pub fn default_opportunities(&self) -> Vec<Prediction> {
        let defaults = &self.config.opportunities;
        self.opportunities(defaults.min_confidence, defaults.limit)
    }

    pub fn risk_alerts(&self) -> Vec<Alert> {
        MarketAggregator::risk_alerts(&self.all_predictions(), &self.config.alerts)
    }

    /// `None` until at least one symbol has been recorded.
    pub fn market_summary(&self) -> Option<MarketSummary> {
        let total = self.histories.len();
        if total == 0 {
            return None;
        }
        Some(MarketAggregator::summarize(total, &self.all_predictions()))
    }

    /// Prediction, statistics and market summary for one symbol.
    pub fn analysis(&self, symbol: &str) -> Result<AnalysisReport> {
        let prediction = self.predict(symbol)?;
        Ok(AnalysisReport {
            symbol: symbol.to_string(),
            statistics: self.statistics(symbol),
            market_summary: self.market_summary(),
            report_date: prediction.timestamp,
            prediction,
        })
    }

    /// Record what a prediction said against what the market did.
    pub fn record_outcome(&self, symbol: &str, predicted: ActionKind, actual: ActionKind) {
        self.accuracy.record_outcome(symbol, predicted, actual);
    }

    /// Accuracy for one symbol, or across all symbols.
    ///
    /// A symbol with neither history nor outcomes is `UnknownSymbol`.
    pub fn accuracy(&self, symbol: Option<&str>) -> Result<AccuracyReport> {
        if let Some(symbol) = symbol {
            if !self.histories.contains_key(symbol) && !self.accuracy.contains(symbol) {
                return Err(AugurError::UnknownSymbol(symbol.to_string()));
            }
        }
        Ok(self.accuracy.accuracy(symbol))
    }

    /// Tracked symbols, sorted.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.histories.iter().map(|e| e.key().clone()).collect();
        symbols.sort();
        symbols
    }

    pub fn sample_count(&self, symbol: &str) -> usize {
        self.histories.get(symbol).map(|h| h.len()).unwrap_or(0)
    }

    /// Symbols that have a full indicator window.
    pub fn ready_count(&self) -> usize {
        self.histories
            .iter()
            .filter(|e| e.value().len() >= MIN_SAMPLES)
            .count()
    }

    /// Drop symbols whose newest sample is older than `max_idle` at `now`.
    /// Returns how many were removed.
    pub fn evict_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> usize {
        let before = self.histories.len();
        self.histories.retain(|_, history| {
            history
                .latest()
                .map(|s| now - s.timestamp <= max_idle)
                .unwrap_or(false)
        });
        let removed = before.saturating_sub(self.histories.len());
        if removed > 0 {
            info!("Evicted {} idle symbols", removed);
        }
        removed
    }
}
