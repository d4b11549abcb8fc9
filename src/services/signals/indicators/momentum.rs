//! Price change, momentum and rate-of-change indicators.

use crate::types::PriceChanges;

/// Default momentum / ROC lookback.
pub const MOMENTUM_PERIOD: usize = 10;

/// Percentage change between the last price and the price `lookback`
/// samples earlier. Returns 0 when the history is too short.
pub fn change_pct(prices: &[f64], lookback: usize) -> f64 {
    if prices.len() <= lookback {
        return 0.0;
    }
    let last = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - lookback];
    if base == 0.0 {
        return 0.0;
    }
    (last - base) / base * 100.0
}

/// Changes over the 1/5/15/30/60 sample lookbacks.
pub fn price_changes(prices: &[f64]) -> PriceChanges {
    PriceChanges {
        one: change_pct(prices, 1),
        five: change_pct(prices, 5),
        fifteen: change_pct(prices, 15),
        thirty: change_pct(prices, 30),
        sixty: change_pct(prices, 60),
    }
}

/// Absolute price difference over `period` samples.
pub fn momentum(prices: &[f64], period: usize) -> f64 {
    if prices.len() <= period {
        return 0.0;
    }
    prices[prices.len() - 1] - prices[prices.len() - 1 - period]
}

/// Rate of change over `period` samples, in percent.
pub fn rate_of_change(prices: &[f64], period: usize) -> f64 {
    change_pct(prices, period)
}
