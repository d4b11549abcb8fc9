use super::indicators::IndicatorSet;
use super::round::{round1, round2, round6};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final trading action for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Action {
    /// Decide the action from the composite score and risk score.
    ///
    /// Order matters: strong buy, buy, strong sell, sell, hold.
    pub fn decide(weighted_score: f64, risk_score: f64) -> Self {
        if weighted_score >= 0.8 && risk_score < 60.0 {
            Action::StrongBuy
        } else if weighted_score >= 0.4 {
            Action::Buy
        } else if weighted_score <= -0.8 && risk_score < 60.0 {
            Action::StrongSell
        } else if weighted_score <= -0.4 {
            Action::Sell
        } else {
            Action::Hold
        }
    }

    /// Collapse to the side used for targets and accuracy tracking.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::StrongBuy | Action::Buy => ActionKind::Buy,
            Action::Hold => ActionKind::Hold,
            Action::Sell | Action::StrongSell => ActionKind::Sell,
        }
    }

    /// Get display label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Action::StrongBuy => "Strong Buy",
            Action::Buy => "Buy",
            Action::Hold => "Hold",
            Action::Sell => "Sell",
            Action::StrongSell => "Strong Sell",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Action::StrongBuy => "Strong buy signal - a position can be opened",
            Action::Buy => "Buy signal - consider a small position",
            Action::Hold => "Consider waiting - no clear signal",
            Action::Sell => "Sell signal - be careful",
            Action::StrongSell => "Strong sell signal - close or reduce the position",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Action::StrongBuy => "All indicators point to a strong rise.",
            Action::Buy => "Indicators lean bullish, but stay cautious.",
            Action::Hold => "Mixed signals, wait for a clearer opportunity.",
            Action::Sell => "Downside risks are increasing.",
            Action::StrongSell => "Strong bearish signals are present.",
        }
    }
}

/// Buy/sell/hold side of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Buy,
    Sell,
    Hold,
}

/// Category of a scoring sub-signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
    Levels,
}

impl SignalCategory {
    /// Get display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            SignalCategory::Trend => "Trend",
            SignalCategory::Momentum => "Momentum",
            SignalCategory::Volatility => "Volatility",
            SignalCategory::Volume => "Volume",
            SignalCategory::Levels => "Support/Resistance",
        }
    }
}

/// Output of one weighted sub-signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalReading {
    /// Stable sub-signal identifier (e.g., "rsi", "ma_alignment").
    pub id: String,
    /// Sub-signal name (e.g., "RSI", "MACD").
    pub name: String,
    pub category: SignalCategory,
    /// Score, roughly -1.5 (bearish) to +1.5 (bullish).
    pub score: f64,
    pub weight: f64,
    /// Human-readable reason for the score.
    pub explanation: String,
}

/// Price targets derived from the action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTargets {
    #[serde(serialize_with = "round6")]
    pub current: f64,
    #[serde(serialize_with = "round6")]
    pub target1: f64,
    #[serde(serialize_with = "round6")]
    pub target2: f64,
    #[serde(serialize_with = "round6")]
    pub target3: f64,
    #[serde(serialize_with = "round6")]
    pub stop_loss: f64,
    #[serde(serialize_with = "round2")]
    pub risk_reward: f64,
    #[serde(serialize_with = "round6")]
    pub atr: f64,
}

/// Full prediction for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub symbol: String,
    pub action: Action,
    pub action_kind: ActionKind,
    /// Confidence percentage, always within 50-95.
    #[serde(serialize_with = "round1")]
    pub confidence: f64,
    /// Risk score, always within 0-100.
    #[serde(serialize_with = "round1")]
    pub risk_score: f64,
    /// Weight-normalized composite of all sub-signals.
    #[serde(serialize_with = "round2")]
    pub weighted_score: f64,
    pub recommendation: String,
    pub explanation: String,
    pub signals: Vec<SignalReading>,
    pub indicators: IndicatorSet,
    pub targets: PriceTargets,
    /// Timestamp of the newest sample the prediction was derived from.
    pub timestamp: DateTime<Utc>,
}
