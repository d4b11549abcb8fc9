use super::round::{round2, round4, round6, round6_vec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trend classification from moving-average ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    StrongUp,
    Up,
    SlightUp,
    Flat,
    SlightDown,
    Down,
    StrongDown,
}

impl TrendLabel {
    /// Get display label for this trend.
    pub fn label(&self) -> &'static str {
        match self {
            TrendLabel::StrongUp => "Strong Uptrend",
            TrendLabel::Up => "Uptrend",
            TrendLabel::SlightUp => "Slight Uptrend",
            TrendLabel::Flat => "Sideways",
            TrendLabel::SlightDown => "Slight Downtrend",
            TrendLabel::Down => "Downtrend",
            TrendLabel::StrongDown => "Strong Downtrend",
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, TrendLabel::StrongUp | TrendLabel::Up | TrendLabel::SlightUp)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(
            self,
            TrendLabel::StrongDown | TrendLabel::Down | TrendLabel::SlightDown
        )
    }

    /// Slight trends are only a short-MA crossover.
    pub fn is_slight(&self) -> bool {
        matches!(self, TrendLabel::SlightUp | TrendLabel::SlightDown)
    }
}

/// Percentage price changes over fixed sample lookbacks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChanges {
    #[serde(rename = "1", serialize_with = "round2")]
    pub one: f64,
    #[serde(rename = "5", serialize_with = "round2")]
    pub five: f64,
    #[serde(rename = "15", serialize_with = "round2")]
    pub fifteen: f64,
    #[serde(rename = "30", serialize_with = "round2")]
    pub thirty: f64,
    #[serde(rename = "60", serialize_with = "round2")]
    pub sixty: f64,
}

/// Simple moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    #[serde(serialize_with = "round6")]
    pub sma5: f64,
    #[serde(serialize_with = "round6")]
    pub sma10: f64,
    #[serde(serialize_with = "round6")]
    pub sma20: f64,
    #[serde(serialize_with = "round6")]
    pub sma50: f64,
    #[serde(serialize_with = "round6")]
    pub ema12: f64,
    #[serde(serialize_with = "round6")]
    pub ema26: f64,
}

/// MACD line, signal and histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValues {
    #[serde(serialize_with = "round4")]
    pub line: f64,
    #[serde(serialize_with = "round4")]
    pub signal: f64,
    #[serde(serialize_with = "round4")]
    pub histogram: f64,
}

/// Bollinger bands and the price position inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValues {
    #[serde(serialize_with = "round6")]
    pub upper: f64,
    #[serde(serialize_with = "round6")]
    pub middle: f64,
    #[serde(serialize_with = "round6")]
    pub lower: f64,
    /// Position in percent; below 0 or above 100 means outside the bands.
    #[serde(serialize_with = "round2")]
    pub position: f64,
}

/// Fibonacci retracement levels between the window high and low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    #[serde(rename = "0%", serialize_with = "round6")]
    pub level_0: f64,
    #[serde(rename = "23.6%", serialize_with = "round6")]
    pub level_236: f64,
    #[serde(rename = "38.2%", serialize_with = "round6")]
    pub level_382: f64,
    #[serde(rename = "50%", serialize_with = "round6")]
    pub level_500: f64,
    #[serde(rename = "61.8%", serialize_with = "round6")]
    pub level_618: f64,
    #[serde(rename = "100%", serialize_with = "round6")]
    pub level_1000: f64,
}

/// Snapshot of every indicator for one symbol's current window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    #[serde(serialize_with = "round6")]
    pub current_price: f64,
    pub changes: PriceChanges,
    pub moving_averages: MovingAverages,
    pub macd: MacdValues,
    #[serde(serialize_with = "round2")]
    pub rsi: f64,
    #[serde(serialize_with = "round2")]
    pub stoch_rsi: f64,
    pub bollinger: BollingerValues,
    #[serde(serialize_with = "round4")]
    pub atr: f64,
    #[serde(serialize_with = "round2")]
    pub volatility_pct: f64,
    #[serde(serialize_with = "round2")]
    pub volume_ratio: f64,
    pub trend: TrendLabel,
    #[serde(serialize_with = "round2")]
    pub trend_strength: f64,
    #[serde(serialize_with = "round4")]
    pub momentum: f64,
    #[serde(serialize_with = "round2")]
    pub roc: f64,
    /// Nearest first.
    #[serde(serialize_with = "round6_vec")]
    pub support_levels: Vec<f64>,
    /// Nearest first.
    #[serde(serialize_with = "round6_vec")]
    pub resistance_levels: Vec<f64>,
    pub fibonacci: FibonacciLevels,
    /// Number of samples the snapshot was computed from.
    pub sample_count: usize,
    /// Timestamp of the newest sample.
    pub as_of: DateTime<Utc>,
}

impl IndicatorSet {
    pub fn nearest_support(&self) -> Option<f64> {
        self.support_levels.first().copied()
    }

    pub fn nearest_resistance(&self) -> Option<f64> {
        self.resistance_levels.first().copied()
    }

    /// Distance from the current price down to the nearest support, in percent.
    pub fn support_distance_pct(&self) -> Option<f64> {
        let support = self.nearest_support()?;
        Some((self.current_price - support) / self.current_price * 100.0)
    }

    /// Distance from the current price up to the nearest resistance, in percent.
    pub fn resistance_distance_pct(&self) -> Option<f64> {
        let resistance = self.nearest_resistance()?;
        Some((resistance - self.current_price) / self.current_price * 100.0)
    }
}
