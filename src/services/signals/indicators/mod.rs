//! Technical indicator implementations.
//!
//! Every function here is pure: it takes the price (or volume) series of a
//! window, oldest first, and degrades gracefully on short or flat input.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod levels;
pub mod macd;
pub mod momentum;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod trend;
pub mod volume;

use crate::error::{AugurError, Result};
use crate::types::{IndicatorSet, MovingAverages, Sample};
use tracing::debug;

/// Samples required before any indicator is computed.
pub const MIN_SAMPLES: usize = 20;

/// Computes the full indicator snapshot for a window of samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// Compute every indicator from `samples` (oldest first).
    ///
    /// Fewer than [`MIN_SAMPLES`] samples yields `InsufficientData`.
    pub fn compute(symbol: &str, samples: &[Sample]) -> Result<IndicatorSet> {
        let Some(latest) = samples.last().filter(|_| samples.len() >= MIN_SAMPLES) else {
            return Err(AugurError::InsufficientData {
                symbol: symbol.to_string(),
                have: samples.len(),
                need: MIN_SAMPLES,
            });
        };

        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        let volumes: Vec<f64> = samples.iter().map(|s| s.volume).collect();
        let current_price = latest.price;

        let moving_averages = MovingAverages {
            sma5: sma::sma(&prices, 5),
            sma10: sma::sma(&prices, 10),
            sma20: sma::sma(&prices, 20),
            sma50: sma::sma(&prices, 50),
            ema12: ema::ema(&prices, 12),
            ema26: ema::ema(&prices, 26),
        };

        let atr = atr::atr(&prices, atr::ATR_PERIOD);
        let (support_levels, resistance_levels) = levels::support_resistance(&prices);

        debug!(
            "Computing indicators for {} over {} samples",
            symbol,
            samples.len()
        );

        Ok(IndicatorSet {
            current_price,
            changes: momentum::price_changes(&prices),
            macd: macd::macd(&prices),
            rsi: rsi::rsi(&prices, rsi::RSI_PERIOD),
            stoch_rsi: stochastic::stoch_rsi(&prices, rsi::RSI_PERIOD),
            bollinger: bollinger::bollinger(
                &prices,
                bollinger::BOLLINGER_PERIOD,
                bollinger::BOLLINGER_STD_DEV,
            ),
            atr,
            volatility_pct: atr::volatility_pct(atr, current_price),
            volume_ratio: volume::volume_ratio(&volumes, volume::VOLUME_PERIOD),
            trend: trend::classify_trend(&moving_averages, current_price),
            trend_strength: trend::trend_strength(&prices, trend::TREND_PERIOD),
            momentum: momentum::momentum(&prices, momentum::MOMENTUM_PERIOD),
            roc: momentum::rate_of_change(&prices, momentum::MOMENTUM_PERIOD),
            support_levels,
            resistance_levels,
            fibonacci: levels::fibonacci(&prices),
            moving_averages,
            sample_count: samples.len(),
            as_of: latest.timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrendLabel;
    use chrono::{TimeZone, Utc};

    fn samples_from(prices: &[f64]) -> Vec<Sample> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                Sample::new(p, 1000.0, Utc.timestamp_millis_opt(1_000_000 + i as i64 * 1000).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_insufficient_data() {
        let samples = samples_from(&[100.0; 19]);
        let err = IndicatorCalculator::compute("BTC", &samples).unwrap_err();
        assert_eq!(
            err,
            AugurError::InsufficientData {
                symbol: "BTC".to_string(),
                have: 19,
                need: 20
            }
        );
    }

    #[test]
    fn test_flat_window() {
        let samples = samples_from(&[100.0; 20]);
        let set = IndicatorCalculator::compute("FLAT", &samples).unwrap();
        assert_eq!(set.rsi, 100.0);
        assert_eq!(set.stoch_rsi, 50.0);
        assert_eq!(set.bollinger.position, 50.0);
        assert_eq!(set.trend, TrendLabel::Flat);
        assert_eq!(set.atr, 0.0);
        assert_eq!(set.volume_ratio, 1.0);
        assert_eq!(set.trend_strength, 50.0);
        assert!(set.support_levels.is_empty());
        assert!(set.resistance_levels.is_empty());
    }

    #[test]
    fn test_rising_window() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        let set = IndicatorCalculator::compute("UP", &samples_from(&prices)).unwrap();
        assert_eq!(set.trend, TrendLabel::StrongUp);
        assert!(set.rsi > 70.0);
        assert!(set.macd.line > 0.0);
        assert!(set.roc > 3.0);
        assert_eq!(set.sample_count, 50);
        assert_eq!(set.current_price, prices[49]);
    }

    #[test]
    fn test_as_of_is_latest_timestamp() {
        let samples = samples_from(&[100.0; 25]);
        let set = IndicatorCalculator::compute("TS", &samples).unwrap();
        assert_eq!(set.as_of, samples[24].timestamp);
    }
}
