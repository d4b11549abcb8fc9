//! Exponential Moving Average (EMA).

use super::sma::mean;

/// EMA over the whole series, seeded with the SMA of the first `period`
/// values and smoothed with `2 / (period + 1)`.
///
/// Falls back to the plain mean when fewer than `period` values exist.
pub fn ema(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return mean(values);
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // First EMA is SMA
    let mut ema = mean(&values[..period]);
    for value in &values[period..] {
        ema = (value - ema) * multiplier + ema;
    }

    ema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_seeded_with_sma() {
        let values = [2.0, 4.0, 6.0];
        assert!((ema(&values, 3) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_ema_recursive_step() {
        // seed = 2.0, alpha = 2/3 => 10 * 2/3 + 2 * 1/3
        let values = [1.0, 3.0, 10.0];
        let expected = 10.0 * (2.0 / 3.0) + 2.0 * (1.0 / 3.0);
        assert!((ema(&values, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ema_short_series_is_mean() {
        let values = [1.0, 2.0, 3.0];
        assert!((ema(&values, 12) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ema_tracks_uptrend_above_sma() {
        let values: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let sma_all = mean(&values[values.len() - 26..]);
        assert!(ema(&values, 12) > sma_all);
    }

    #[test]
    fn test_ema_of_constant_is_constant() {
        let values = [0.3; 9];
        assert_eq!(ema(&values, 9), 0.3);
    }
}
