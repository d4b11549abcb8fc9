use super::market::MarketSummary;
use super::prediction::{ActionKind, Prediction};
use super::round::{round2, round6};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of the overall move across the retained window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceDirection {
    Up,
    Down,
}

/// Descriptive statistics over a symbol's retained prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolStats {
    pub symbol: String,
    pub data_points: usize,
    #[serde(serialize_with = "round6")]
    pub min: f64,
    #[serde(serialize_with = "round6")]
    pub max: f64,
    #[serde(serialize_with = "round6")]
    pub range: f64,
    #[serde(serialize_with = "round6")]
    pub mean: f64,
    #[serde(serialize_with = "round6")]
    pub median: f64,
    #[serde(serialize_with = "round6")]
    pub std_dev: f64,
    /// Standard deviation relative to the mean, in percent.
    #[serde(serialize_with = "round2")]
    pub coefficient_of_variation: f64,
    pub price_trend: PriceDirection,
    /// First-to-last change across the window, in percent.
    #[serde(serialize_with = "round2")]
    pub total_change_pct: f64,
}

/// One recorded prediction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    pub predicted: ActionKind,
    pub actual: ActionKind,
    pub recorded_at: DateTime<Utc>,
}

impl OutcomeRecord {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

/// Prediction accuracy for one symbol or for all symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyReport {
    /// None when aggregated across all symbols.
    pub symbol: Option<String>,
    pub total_predictions: usize,
    pub correct_predictions: usize,
    #[serde(serialize_with = "round2")]
    pub accuracy_pct: f64,
}

/// Combined analysis for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub symbol: String,
    pub prediction: Prediction,
    pub statistics: Option<SymbolStats>,
    pub market_summary: Option<MarketSummary>,
    pub report_date: DateTime<Utc>,
}
