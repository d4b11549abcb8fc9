//! Simple Moving Average (SMA).

/// Arithmetic mean, 0 for an empty slice.
///
/// Accumulates deviations from the first value so that a run of identical
/// values averages to exactly that value.
pub fn mean(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return 0.0;
    };
    let offset: f64 = values.iter().map(|v| v - first).sum();
    first + offset / values.len() as f64
}

/// Mean of the last `period` prices, or of all prices when fewer exist.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    let start = prices.len().saturating_sub(period);
    mean(&prices[start..])
}
