//! Cross-symbol aggregation: market summary, opportunities and risk alerts.

use crate::config::AlertThresholds;
use crate::types::{
    ActionKind, Alert, AlertKind, MarketPhase, MarketSummary, Prediction, Sentiment, TrendBucket,
};
use std::cmp::Ordering;

/// Volatility % above which a symbol counts as highly volatile.
const HIGH_VOLATILITY_PCT: f64 = 5.0;
/// Histogram magnitude under which the MACD is treated as crossing.
const MACD_CROSS_EPSILON: f64 = 0.0001;
/// Distance to a level, in percent, that counts as "at" the level.
const LEVEL_PROXIMITY_PCT: f64 = 1.0;

/// Folds per-symbol predictions into market-wide views.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketAggregator;

impl MarketAggregator {
    /// Summarize the market from the current predictions.
    ///
    /// `total_symbols` counts every tracked symbol, including those still
    /// warming up, and is the base of the volatility breadth.
    pub fn summarize(total_symbols: usize, predictions: &[Prediction]) -> MarketSummary {
        let mut strong_rising = 0;
        let mut rising = 0;
        let mut neutral = 0;
        let mut falling = 0;
        let mut strong_falling = 0;
        let mut rsi_sum = 0.0;
        let mut volume_sum = 0.0;
        let mut volume_count = 0;
        let mut high_volatility_count = 0;

        for prediction in predictions {
            let ind = &prediction.indicators;

            match TrendBucket::from_change(ind.changes.five) {
                TrendBucket::StrongRising => strong_rising += 1,
                TrendBucket::Rising => rising += 1,
                TrendBucket::Neutral => neutral += 1,
                TrendBucket::Falling => falling += 1,
                TrendBucket::StrongFalling => strong_falling += 1,
            }

            rsi_sum += ind.rsi;

            if ind.volatility_pct > HIGH_VOLATILITY_PCT {
                high_volatility_count += 1;
            }

            if ind.volume_ratio > 0.0 {
                volume_sum += ind.volume_ratio;
                volume_count += 1;
            }
        }

        let bullish = (strong_rising * 2 + rising) as f64;
        let bearish = (strong_falling * 2 + falling) as f64;
        let sentiment = Sentiment::from_scores(bullish, bearish);
        let sentiment_score = sentiment.score();

        let market_rsi = if predictions.is_empty() {
            50.0
        } else {
            rsi_sum / predictions.len() as f64
        };
        let avg_volume_ratio = if volume_count > 0 {
            volume_sum / volume_count as f64
        } else {
            1.0
        };
        let volatility_pct = if total_symbols > 0 {
            high_volatility_count as f64 / total_symbols as f64 * 100.0
        } else {
            0.0
        };

        MarketSummary {
            total_symbols,
            analyzed_symbols: predictions.len(),
            strong_rising,
            rising,
            neutral,
            falling,
            strong_falling,
            sentiment,
            sentiment_score,
            market_phase: MarketPhase::classify(sentiment_score, market_rsi),
            market_rsi,
            avg_volume_ratio,
            high_volatility_count,
            volatility_pct,
            timestamp: predictions.iter().map(|p| p.timestamp).max(),
        }
    }

    /// Buy-side predictions with enough confidence and acceptable risk,
    /// highest confidence first, then lowest risk.
    pub fn top_opportunities(
        predictions: &[Prediction],
        min_confidence: f64,
        max_risk: f64,
        limit: usize,
    ) -> Vec<Prediction> {
        let mut opportunities: Vec<Prediction> = predictions
            .iter()
            .filter(|p| {
                p.action_kind == ActionKind::Buy
                    && p.confidence >= min_confidence
                    && p.risk_score < max_risk
            })
            .cloned()
            .collect();

        opportunities.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    a.risk_score
                        .partial_cmp(&b.risk_score)
                        .unwrap_or(Ordering::Equal)
                })
        });
        opportunities.truncate(limit);
        opportunities
    }

    /// Threshold alerts for every prediction, most severe first.
    ///
    /// The sort is stable, so alerts of equal severity keep symbol order.
    pub fn risk_alerts(predictions: &[Prediction], thresholds: &AlertThresholds) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = predictions
            .iter()
            .flat_map(|p| symbol_alerts(p, thresholds))
            .collect();
        alerts.sort_by_key(|a| a.severity);
        alerts
    }
}

fn symbol_alerts(prediction: &Prediction, thresholds: &AlertThresholds) -> Vec<Alert> {
    let symbol = prediction.symbol.as_str();
    let ind = &prediction.indicators;
    let change = ind.changes.five;
    let mut alerts = Vec::new();

    if ind.volatility_pct > thresholds.volatility * 100.0 {
        alerts.push(Alert::new(symbol, AlertKind::HighVolatility, ind.volatility_pct));
    }
    if change < thresholds.rapid_decline {
        alerts.push(Alert::new(symbol, AlertKind::RapidDecline, change));
    }
    if change > thresholds.rapid_increase {
        alerts.push(Alert::new(symbol, AlertKind::RapidIncrease, change));
    }
    if ind.rsi > thresholds.rsi_overbought {
        alerts.push(Alert::new(symbol, AlertKind::Overbought, ind.rsi));
    }
    if ind.rsi < thresholds.rsi_oversold {
        alerts.push(Alert::new(symbol, AlertKind::Oversold, ind.rsi));
    }
    if ind.macd.histogram.abs() < MACD_CROSS_EPSILON && ind.macd.line > 0.0 {
        alerts.push(Alert::new(
            symbol,
            AlertKind::MacdBullishCross,
            ind.macd.histogram,
        ));
    }
    if let (Some(level), Some(distance)) = (ind.nearest_support(), ind.support_distance_pct()) {
        if distance < LEVEL_PROXIMITY_PCT {
            alerts.push(Alert::new(symbol, AlertKind::NearSupport, level));
        }
    }
    if let (Some(level), Some(distance)) =
        (ind.nearest_resistance(), ind.resistance_distance_pct())
    {
        if distance < LEVEL_PROXIMITY_PCT {
            alerts.push(Alert::new(symbol, AlertKind::NearResistance, level));
        }
    }

    alerts
}
