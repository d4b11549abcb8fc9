//! Stochastic RSI.

use super::rsi::rsi;

/// Normalizes the latest RSI against the min/max of the trailing `period`
/// RSI values.
///
/// Needs `2 * period` prices; returns 50 with fewer, or when the RSI range
/// is flat.
pub fn stoch_rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period * 2 {
        return 50.0;
    }

    // RSI of every prefix ending at index period..len
    let rsi_values: Vec<f64> = (period..prices.len())
        .map(|end| rsi(&prices[..=end], period))
        .collect();

    if rsi_values.len() < period {
        return 50.0;
    }

    let recent = &rsi_values[rsi_values.len() - period..];
    let min_rsi = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let max_rsi = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_rsi == min_rsi {
        return 50.0;
    }

    let latest = rsi_values[rsi_values.len() - 1];
    ((latest - min_rsi) / (max_rsi - min_rsi) * 100.0).clamp(0.0, 100.0)
}
