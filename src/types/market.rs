use super::round::{round1, round2, round6};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Short-term move bucket from the 5-sample % change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBucket {
    StrongRising,
    Rising,
    Neutral,
    Falling,
    StrongFalling,
}

impl TrendBucket {
    /// Classify a 5-sample % change.
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct > 3.0 {
            TrendBucket::StrongRising
        } else if change_pct > 1.0 {
            TrendBucket::Rising
        } else if change_pct < -3.0 {
            TrendBucket::StrongFalling
        } else if change_pct < -1.0 {
            TrendBucket::Falling
        } else {
            TrendBucket::Neutral
        }
    }
}

/// Aggregate market sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
}

impl Sentiment {
    /// Map bullish/bearish weighted counts to a sentiment.
    pub fn from_scores(bullish: f64, bearish: f64) -> Self {
        if bullish > bearish * 1.5 {
            Sentiment::VeryBullish
        } else if bullish > bearish {
            Sentiment::Bullish
        } else if bearish > bullish * 1.5 {
            Sentiment::VeryBearish
        } else if bearish > bullish {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    /// Fixed numeric score for this sentiment.
    pub fn score(&self) -> u8 {
        match self {
            Sentiment::VeryBullish => 85,
            Sentiment::Bullish => 65,
            Sentiment::Neutral => 50,
            Sentiment::Bearish => 35,
            Sentiment::VeryBearish => 15,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::VeryBullish => "Very Positive",
            Sentiment::Bullish => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Bearish => "Negative",
            Sentiment::VeryBearish => "Very Negative",
        }
    }
}

/// Market phase from sentiment and average RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPhase {
    OverboughtCaution,
    OversoldOpportunity,
    Uptrend,
    Downtrend,
    Consolidation,
}

impl MarketPhase {
    pub fn classify(sentiment_score: u8, market_rsi: f64) -> Self {
        if market_rsi > 65.0 && sentiment_score > 70 {
            MarketPhase::OverboughtCaution
        } else if market_rsi < 35.0 && sentiment_score < 30 {
            MarketPhase::OversoldOpportunity
        } else if sentiment_score > 60 {
            MarketPhase::Uptrend
        } else if sentiment_score < 40 {
            MarketPhase::Downtrend
        } else {
            MarketPhase::Consolidation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketPhase::OverboughtCaution => "Overbought - Caution",
            MarketPhase::OversoldOpportunity => "Oversold - Opportunity",
            MarketPhase::Uptrend => "Uptrend",
            MarketPhase::Downtrend => "Downtrend",
            MarketPhase::Consolidation => "Consolidation",
        }
    }
}

/// Cross-symbol market summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    /// Every tracked symbol, including those still warming up.
    pub total_symbols: usize,
    /// Symbols that contributed a prediction.
    pub analyzed_symbols: usize,
    pub strong_rising: usize,
    pub rising: usize,
    pub neutral: usize,
    pub falling: usize,
    pub strong_falling: usize,
    pub sentiment: Sentiment,
    pub sentiment_score: u8,
    pub market_phase: MarketPhase,
    #[serde(serialize_with = "round1")]
    pub market_rsi: f64,
    #[serde(serialize_with = "round2")]
    pub avg_volume_ratio: f64,
    pub high_volatility_count: usize,
    /// Share of tracked symbols in high volatility, in percent.
    #[serde(serialize_with = "round1")]
    pub volatility_pct: f64,
    /// Newest sample timestamp across the analyzed symbols.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Alert severity, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
    Info,
    Success,
}

/// Kind of risk alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    HighVolatility,
    RapidDecline,
    RapidIncrease,
    Overbought,
    Oversold,
    MacdBullishCross,
    NearSupport,
    NearResistance,
}

impl AlertKind {
    pub fn severity(&self) -> Severity {
        match self {
            AlertKind::RapidDecline => Severity::Danger,
            AlertKind::HighVolatility | AlertKind::Overbought | AlertKind::NearResistance => {
                Severity::Warning
            }
            AlertKind::RapidIncrease | AlertKind::NearSupport => Severity::Info,
            AlertKind::Oversold | AlertKind::MacdBullishCross => Severity::Success,
        }
    }

    /// Human-readable message for a symbol and the triggering value.
    pub fn message(&self, symbol: &str, value: f64) -> String {
        match self {
            AlertKind::HighVolatility => {
                format!("{} is in very high volatility ({:.2}%)", symbol, value)
            }
            AlertKind::RapidDecline => format!("{} is falling fast ({:.2}%)", symbol, value),
            AlertKind::RapidIncrease => format!("{} is rising fast (+{:.2}%)", symbol, value),
            AlertKind::Overbought => {
                format!("{} is in the overbought zone (RSI: {:.1})", symbol, value)
            }
            AlertKind::Oversold => format!("{} is in the oversold zone (RSI: {:.1})", symbol, value),
            AlertKind::MacdBullishCross => format!("{} MACD bullish crossover is near", symbol),
            AlertKind::NearSupport => format!("{} is at support (${:.2})", symbol, value),
            AlertKind::NearResistance => format!("{} is at resistance (${:.2})", symbol, value),
        }
    }
}

/// Per-symbol risk alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub symbol: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    #[serde(serialize_with = "round6")]
    pub value: f64,
}

impl Alert {
    pub fn new(symbol: &str, kind: AlertKind, value: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            kind,
            severity: kind.severity(),
            message: kind.message(symbol, value),
            value,
        }
    }
}
