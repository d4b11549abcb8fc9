//! MACD (Moving Average Convergence Divergence).

use super::ema::ema;
use crate::types::MacdValues;

const FAST_PERIOD: usize = 12;
const SLOW_PERIOD: usize = 26;
const SIGNAL_PERIOD: usize = 9;

/// MACD line, signal and histogram for the current window.
///
/// The signal is an EMA(9) over the current line value repeated nine times
/// rather than over a rolling history of line values. With the exact mean
/// used for seeding, the signal equals the line and the histogram is 0.
pub fn macd(prices: &[f64]) -> MacdValues {
    let line = ema(prices, FAST_PERIOD) - ema(prices, SLOW_PERIOD);
    let signal = ema(&[line; SIGNAL_PERIOD], SIGNAL_PERIOD);

    MacdValues {
        line,
        signal,
        histogram: line - signal,
    }
}
