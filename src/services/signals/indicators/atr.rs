//! Average True Range (ATR) proxy.
//!
//! Only trade prices are available, so the true range of a step is the
//! absolute price change between consecutive samples.

use super::bollinger::std_dev;
use super::sma::mean;

/// Default ATR lookback.
pub const ATR_PERIOD: usize = 14;

/// Mean absolute price change over the last `period` deltas.
///
/// With fewer than `period + 1` prices the sample standard deviation of the
/// prices is used instead.
pub fn atr(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return std_dev(prices);
    }

    let window = &prices[prices.len() - period - 1..];
    let ranges: Vec<f64> = window.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    mean(&ranges)
}

/// ATR relative to the current price, in percent.
pub fn volatility_pct(atr: f64, current_price: f64) -> f64 {
    if current_price == 0.0 {
        return 0.0;
    }
    atr / current_price * 100.0
}
