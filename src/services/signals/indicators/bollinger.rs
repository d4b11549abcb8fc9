//! Bollinger Bands indicator.

use super::sma::mean;
use crate::types::BollingerValues;

/// Default band period.
pub const BOLLINGER_PERIOD: usize = 20;
/// Default band width in standard deviations.
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Sample standard deviation (n - 1), 0 for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance: f64 =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Bollinger Bands over the last `period` prices.
///
/// Consists of:
/// - Middle band: SMA(period)
/// - Upper band: SMA + k * StdDev
/// - Lower band: SMA - k * StdDev
///
/// The position is `(price - lower) / (upper - lower) * 100`. It is not
/// clamped: values outside 0-100 mean the price left the bands. Collapsed
/// bands give 50.
pub fn bollinger(prices: &[f64], period: usize, k: f64) -> BollingerValues {
    let current = prices.last().copied().unwrap_or(0.0);

    if prices.len() < period {
        let avg = mean(prices);
        return BollingerValues {
            upper: avg,
            middle: avg,
            lower: avg,
            position: 50.0,
        };
    }

    let recent = &prices[prices.len() - period..];
    let middle = mean(recent);
    let sd = std_dev(recent);

    let upper = middle + k * sd;
    let lower = middle - k * sd;

    let position = if upper != lower {
        (current - lower) / (upper - lower) * 100.0
    } else {
        50.0
    };

    BollingerValues {
        upper,
        middle,
        lower,
        position,
    }
}
