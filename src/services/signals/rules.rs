//! The eight weighted sub-signals of the composite score.

use super::Signal;
use crate::types::{IndicatorSet, SignalCategory, TrendLabel};

/// Get all sub-signals in scoring order.
pub fn all_signals() -> Vec<Box<dyn Signal>> {
    vec![
        Box::new(RsiSignal),
        Box::new(MacdSignal),
        Box::new(TrendSignal),
        Box::new(MovingAverageSignal),
        Box::new(BollingerSignal),
        Box::new(MomentumSignal),
        Box::new(VolumeSignal),
        Box::new(LevelsSignal),
    ]
}

/// RSI zones, with reversal calls only when StochRSI agrees.
///
/// An overbought RSI is only bearish when StochRSI sits in its upper half
/// (and oversold only when in its lower half). A pinned StochRSI of 50 means
/// the RSI has been saturated for the whole lookback, which reads as
/// persistence rather than exhaustion.
pub struct RsiSignal;

impl Signal for RsiSignal {
    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Momentum
    }

    fn weight(&self) -> f64 {
        1.2
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let (rsi, stoch) = (ind.rsi, ind.stoch_rsi);

        if rsi < 25.0 && stoch < 50.0 {
            (1.5, format!("RSI very low ({:.1}) - strong buy signal", rsi))
        } else if rsi < 35.0 && stoch < 50.0 {
            (1.0, format!("RSI near oversold ({:.1}) - buy signal", rsi))
        } else if rsi > 75.0 && stoch > 50.0 {
            (-1.5, format!("RSI very high ({:.1}) - strong sell signal", rsi))
        } else if rsi > 65.0 && stoch > 50.0 {
            (-1.0, format!("RSI near overbought ({:.1}) - sell signal", rsi))
        } else if rsi > 50.0 {
            (0.3, format!("RSI in positive zone ({:.1})", rsi))
        } else {
            (-0.3, format!("RSI in negative zone ({:.1})", rsi))
        }
    }
}

/// MACD histogram direction, falling back to the line sign.
pub struct MacdSignal;

impl Signal for MacdSignal {
    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Trend
    }

    fn weight(&self) -> f64 {
        1.5
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let macd = &ind.macd;

        if macd.histogram > 0.0 {
            (
                1.2,
                format!("MACD bullish crossover (histogram: {:.4})", macd.histogram),
            )
        } else if macd.histogram < 0.0 {
            (
                -1.2,
                format!("MACD bearish crossover (histogram: {:.4})", macd.histogram),
            )
        } else if macd.line > 0.0 {
            (0.5, "MACD in positive momentum".to_string())
        } else if macd.line < 0.0 {
            (-0.5, "MACD in negative momentum".to_string())
        } else {
            (0.0, "MACD flat".to_string())
        }
    }
}

/// Trend label from the moving-average ordering.
pub struct TrendSignal;

impl Signal for TrendSignal {
    fn id(&self) -> &str {
        "trend"
    }

    fn name(&self) -> &str {
        "Trend"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Trend
    }

    fn weight(&self) -> f64 {
        1.3
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let score = match ind.trend {
            TrendLabel::StrongUp => 1.5,
            TrendLabel::Up | TrendLabel::SlightUp => 1.0,
            TrendLabel::StrongDown => -1.5,
            TrendLabel::Down | TrendLabel::SlightDown => -1.0,
            TrendLabel::Flat => 0.0,
        };

        let explanation = if ind.trend == TrendLabel::Flat {
            ind.trend.label().to_string()
        } else {
            format!(
                "{} - strength: {:.1}",
                ind.trend.label(),
                ind.trend_strength
            )
        };

        (score, explanation)
    }
}

/// Price and short/medium SMA alignment.
pub struct MovingAverageSignal;

impl Signal for MovingAverageSignal {
    fn id(&self) -> &str {
        "ma_alignment"
    }

    fn name(&self) -> &str {
        "MA Alignment"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Trend
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let p = ind.current_price;
        let ma = &ind.moving_averages;

        if p > ma.sma5 && ma.sma5 > ma.sma10 && ma.sma10 > ma.sma20 {
            (1.0, "All moving averages aligned upward".to_string())
        } else if p < ma.sma5 && ma.sma5 < ma.sma10 && ma.sma10 < ma.sma20 {
            (-1.0, "All moving averages aligned downward".to_string())
        } else if p > ma.sma5 && ma.sma5 > ma.sma10 {
            (0.5, "Short-term moving averages positive".to_string())
        } else if p < ma.sma5 && ma.sma5 < ma.sma10 {
            (-0.5, "Short-term moving averages negative".to_string())
        } else {
            (0.0, "Mixed moving average signals".to_string())
        }
    }
}

/// Position inside the Bollinger bands.
pub struct BollingerSignal;

impl Signal for BollingerSignal {
    fn id(&self) -> &str {
        "bollinger"
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Volatility
    }

    fn weight(&self) -> f64 {
        1.1
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let position = ind.bollinger.position;

        if position < 20.0 {
            (
                1.0,
                format!("Near lower Bollinger band ({:.1}%) - buy zone", position),
            )
        } else if position > 80.0 {
            (
                -1.0,
                format!("Near upper Bollinger band ({:.1}%) - sell zone", position),
            )
        } else if position > 60.0 {
            (-0.3, format!("Upper half of Bollinger bands ({:.1}%)", position))
        } else if position < 40.0 {
            (0.3, format!("Lower half of Bollinger bands ({:.1}%)", position))
        } else {
            (0.0, format!("Middle of Bollinger bands ({:.1}%)", position))
        }
    }
}

/// Rate of change over 10 samples.
pub struct MomentumSignal;

impl Signal for MomentumSignal {
    fn id(&self) -> &str {
        "momentum"
    }

    fn name(&self) -> &str {
        "Momentum"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Momentum
    }

    fn weight(&self) -> f64 {
        0.9
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let roc = ind.roc;

        if roc > 3.0 {
            (1.0, format!("Strong positive momentum (ROC: {:.2}%)", roc))
        } else if roc < -3.0 {
            (-1.0, format!("Strong negative momentum (ROC: {:.2}%)", roc))
        } else if roc > 1.0 {
            (0.5, format!("Positive momentum (ROC: {:.2}%)", roc))
        } else if roc < -1.0 {
            (-0.5, format!("Negative momentum (ROC: {:.2}%)", roc))
        } else {
            (0.0, format!("Neutral momentum (ROC: {:.2}%)", roc))
        }
    }
}

/// Latest volume against its 20-sample average.
pub struct VolumeSignal;

impl Signal for VolumeSignal {
    fn id(&self) -> &str {
        "volume"
    }

    fn name(&self) -> &str {
        "Volume"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Volume
    }

    fn weight(&self) -> f64 {
        0.8
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let ratio = ind.volume_ratio;

        if ratio > 2.0 {
            (0.7, format!("Very high volume (x{:.1}) - strong move", ratio))
        } else if ratio > 1.5 {
            (0.5, format!("High volume (x{:.1})", ratio))
        } else if ratio < 0.5 {
            (-0.3, format!("Low volume (x{:.1}) - weak move", ratio))
        } else {
            (0.0, format!("Normal volume (x{:.1})", ratio))
        }
    }
}

/// Proximity to the nearest support and resistance.
pub struct LevelsSignal;

impl Signal for LevelsSignal {
    fn id(&self) -> &str {
        "levels"
    }

    fn name(&self) -> &str {
        "Support/Resistance"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Levels
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn evaluate(&self, ind: &IndicatorSet) -> (f64, String) {
        let support = ind.nearest_support();
        let resistance = ind.nearest_resistance();

        if let (Some(level), Some(distance)) = (support, ind.support_distance_pct()) {
            if distance < 1.0 {
                return (1.0, format!("At strong support (${:.2})", level));
            }
            if distance < 2.0 {
                return (0.5, format!("Near support (${:.2})", level));
            }
        }

        if let (Some(level), Some(distance)) = (resistance, ind.resistance_distance_pct()) {
            if distance < 1.0 {
                return (-1.0, format!("At strong resistance (${:.2})", level));
            }
            if distance < 2.0 {
                return (-0.5, format!("Near resistance (${:.2})", level));
            }
        }

        match (support, resistance) {
            (Some(s), Some(r)) => (0.0, format!("Support: ${:.2} | Resistance: ${:.2}", s, r)),
            (Some(s), None) => (
                0.5,
                format!("Trading above all recent resistance (support: ${:.2})", s),
            ),
            (None, Some(r)) => (
                -0.5,
                format!("Trading below all recent support (resistance: ${:.2})", r),
            ),
            (None, None) => (0.0, "Support/resistance still forming".to_string()),
        }
    }
}
