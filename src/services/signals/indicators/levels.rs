//! Support/resistance detection and Fibonacci retracement levels.

use crate::types::FibonacciLevels;

/// Number of trailing samples scanned for levels.
pub const LEVEL_WINDOW: usize = 50;
/// Maximum levels kept on each side of the price.
pub const MAX_LEVELS: usize = 3;

fn trailing(prices: &[f64], window: usize) -> &[f64] {
    &prices[prices.len().saturating_sub(window)..]
}

/// Support and resistance levels from 5-point local extrema over the last
/// 50 samples.
///
/// A point is a support candidate when it is strictly below both neighbors
/// on each side, a resistance candidate when strictly above. If no candidate
/// of a kind exists, the window minimum (or maximum) stands in. Only
/// supports below and resistances above the current price are kept, nearest
/// first, at most three each.
pub fn support_resistance(prices: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let Some(&current) = prices.last() else {
        return (Vec::new(), Vec::new());
    };

    let recent = trailing(prices, LEVEL_WINDOW);
    let mut supports = Vec::new();
    let mut resistances = Vec::new();

    if recent.len() >= 5 {
        for i in 2..recent.len() - 2 {
            let p = recent[i];
            let neighbors = [recent[i - 2], recent[i - 1], recent[i + 1], recent[i + 2]];

            if neighbors.iter().all(|&n| p < n) {
                supports.push(p);
            }
            if neighbors.iter().all(|&n| p > n) {
                resistances.push(p);
            }
        }
    }

    if supports.is_empty() {
        supports.push(recent.iter().copied().fold(f64::INFINITY, f64::min));
    }
    if resistances.is_empty() {
        resistances.push(recent.iter().copied().fold(f64::NEG_INFINITY, f64::max));
    }

    supports.retain(|&s| s < current);
    resistances.retain(|&r| r > current);

    // Nearest first: highest support, lowest resistance
    supports.sort_by(|a, b| b.total_cmp(a));
    resistances.sort_by(|a, b| a.total_cmp(b));
    supports.truncate(MAX_LEVELS);
    resistances.truncate(MAX_LEVELS);

    (supports, resistances)
}

/// Fibonacci retracement levels between the high and low of the last 50
/// samples, from the high (0%) down to the low (100%).
pub fn fibonacci(prices: &[f64]) -> FibonacciLevels {
    let recent = trailing(prices, LEVEL_WINDOW);
    let (high, low) = if recent.is_empty() {
        (0.0, 0.0)
    } else {
        (
            recent.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            recent.iter().copied().fold(f64::INFINITY, f64::min),
        )
    };
    let diff = high - low;

    FibonacciLevels {
        level_0: high,
        level_236: high - diff * 0.236,
        level_382: high - diff * 0.382,
        level_500: high - diff * 0.5,
        level_618: high - diff * 0.618,
        level_1000: low,
    }
}
