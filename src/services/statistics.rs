//! Descriptive statistics over a symbol's retained prices.

use crate::services::signals::indicators::bollinger::std_dev;
use crate::services::signals::indicators::sma::mean;
use crate::services::signals::MIN_SAMPLES;
use crate::types::{PriceDirection, Sample, SymbolStats};

/// Statistics for a window of samples, or `None` below [`MIN_SAMPLES`].
pub fn symbol_statistics(symbol: &str, samples: &[Sample]) -> Option<SymbolStats> {
    if samples.len() < MIN_SAMPLES {
        return None;
    }

    let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
    let first = *prices.first()?;
    let last = *prices.last()?;

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = mean(&prices);
    let sd = std_dev(&prices);

    Some(SymbolStats {
        symbol: symbol.to_string(),
        data_points: prices.len(),
        min,
        max,
        range: max - min,
        mean: avg,
        median: median(&prices),
        std_dev: sd,
        coefficient_of_variation: if avg != 0.0 { sd / avg * 100.0 } else { 0.0 },
        price_trend: if last > first {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        },
        total_change_pct: (last - first) / first * 100.0,
    })
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.is_empty() {
        0.0
    } else if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
