//! Trend strength and trend classification.

use crate::types::{MovingAverages, TrendLabel};

/// Default trend-strength lookback.
pub const TREND_PERIOD: usize = 14;

/// Net directional movement relative to total movement over the last
/// `period` deltas, scaled to 0-100 (ADX-like).
///
/// Returns 50 when fewer than `period + 1` prices exist or nothing moved.
pub fn trend_strength(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let window = &prices[prices.len() - period - 1..];
    let mut positive = 0.0;
    let mut negative = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            positive += change;
        } else {
            negative += change.abs();
        }
    }

    let total = positive + negative;
    if total == 0.0 {
        return 50.0;
    }

    (positive - negative).abs() / total * 100.0
}

/// Classify the trend from the ordering of SMA(5/10/20/50) and price.
///
/// The full four-MA alignment is checked before the pairwise comparisons,
/// and the bullish side before the bearish side.
pub fn classify_trend(ma: &MovingAverages, current_price: f64) -> TrendLabel {
    let (ma5, ma10, ma20, ma50) = (ma.sma5, ma.sma10, ma.sma20, ma.sma50);

    if ma5 > ma10 && ma10 > ma20 && ma20 > ma50 && current_price > ma5 {
        TrendLabel::StrongUp
    } else if ma5 > ma10 && ma10 > ma20 {
        TrendLabel::Up
    } else if ma5 > ma10 {
        TrendLabel::SlightUp
    } else if ma5 < ma10 && ma10 < ma20 && ma20 < ma50 && current_price < ma5 {
        TrendLabel::StrongDown
    } else if ma5 < ma10 && ma10 < ma20 {
        TrendLabel::Down
    } else if ma5 < ma10 {
        TrendLabel::SlightDown
    } else {
        TrendLabel::Flat
    }
}
