pub mod history;
pub mod ingest;
pub mod market;
pub mod prediction_service;
pub mod signals;
pub mod statistics;

pub use history::SymbolHistory;
pub use market::MarketAggregator;
pub use prediction_service::{build_prediction, PredictionService};
pub use signals::{AccuracyTracker, IndicatorCalculator, Score, SignalScorer, TargetCalculator};
