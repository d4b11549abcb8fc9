//! Relative Strength Index (RSI).

/// Default RSI lookback.
pub const RSI_PERIOD: usize = 14;

/// RSI from the simple average gain and loss over the last `period` deltas.
///
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
///
/// Returns 50 when fewer than `period + 1` prices exist and 100 when there
/// were no losses.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return 50.0;
    }

    let window = &prices[prices.len() - period - 1..];
    let mut gains = 0.0;
    let mut losses = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
}
