//! End-to-end prediction behavior through the public service API

use augur::services::PredictionService;
use augur::types::*;
use augur::{AugurError, Config};
use chrono::{DateTime, TimeZone, Utc};

fn ts(i: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap()
}

fn feed(service: &PredictionService, symbol: &str, prices: &[f64]) {
    for (i, &price) in prices.iter().enumerate() {
        service.record_tick(symbol, price, 1000.0, Some(ts(i as i64)));
    }
}

fn rising(n: i32) -> Vec<f64> {
    (0..n).map(|i| 100.0 * 1.01f64.powi(i)).collect()
}

fn falling(n: i32) -> Vec<f64> {
    (0..n).map(|i| 100.0 * 0.99f64.powi(i)).collect()
}

// =========================================================================
// Warm-up
// =========================================================================

#[test]
fn test_five_ticks_is_insufficient_data() {
    let service = PredictionService::new(Config::default());
    feed(&service, "BTC", &[100.0, 101.0, 102.0, 103.0, 104.0]);

    let err = service.predict("BTC").unwrap_err();
    assert!(err.is_warming_up());
    assert_eq!(
        err,
        AugurError::InsufficientData {
            symbol: "BTC".to_string(),
            have: 5,
            need: 20
        }
    );
    assert!(service.indicators("BTC").unwrap_err().is_warming_up());
    assert!(service.statistics("BTC").is_none());
}

#[test]
fn test_twentieth_tick_ends_warm_up() {
    let service = PredictionService::new(Config::default());
    feed(&service, "BTC", &[100.0; 19]);
    assert!(service.predict("BTC").is_err());

    service.record_tick("BTC", 100.0, 1000.0, Some(ts(19)));
    assert!(service.predict("BTC").is_ok());
}

// =========================================================================
// Reference windows
// =========================================================================

#[test]
fn test_flat_window() {
    let service = PredictionService::new(Config::default());
    feed(&service, "FLAT", &[100.0; 20]);

    let prediction = service.predict("FLAT").unwrap();
    let ind = &prediction.indicators;
    assert_eq!(ind.rsi, 100.0);
    assert_eq!(ind.bollinger.position, 50.0);
    assert_eq!(ind.trend, TrendLabel::Flat);
    assert_eq!(prediction.action, Action::Hold);
    assert_eq!(prediction.action_kind, ActionKind::Hold);
}

#[test]
fn test_steady_uptrend_is_a_buy() {
    let service = PredictionService::new(Config::default());
    feed(&service, "UP", &rising(50));

    let prediction = service.predict("UP").unwrap();
    assert_eq!(prediction.indicators.trend, TrendLabel::StrongUp);
    assert!(prediction.indicators.rsi > 70.0);
    assert!(prediction.weighted_score > 0.4);
    assert!(matches!(prediction.action, Action::Buy | Action::StrongBuy));
    assert_eq!(prediction.action_kind, ActionKind::Buy);

    let targets = &prediction.targets;
    assert!(targets.target1 > targets.current);
    assert!(targets.target2 > targets.target1);
    assert!(targets.target3 > targets.target2);
    assert!(targets.stop_loss < targets.current);
    assert!((targets.risk_reward - 0.75).abs() < 1e-9);
}

#[test]
fn test_arithmetic_climb_is_a_buy() {
    // 100.0 to 150.0 in 0.5 steps
    let prices: Vec<f64> = (0..=100).map(|i| 100.0 + 0.5 * i as f64).collect();
    let service = PredictionService::new(Config::default());
    feed(&service, "LIN", &prices);

    let prediction = service.predict("LIN").unwrap();
    let ind = &prediction.indicators;
    assert_eq!(ind.sample_count, 101);
    assert_eq!(ind.current_price, 150.0);
    assert_eq!(ind.trend, TrendLabel::StrongUp);
    assert_eq!(ind.rsi, 100.0);
    assert_eq!(ind.atr, 0.5);
    assert_eq!(ind.trend_strength, 100.0);
    assert!(ind.bollinger.position > 80.0);
    assert!(ind.resistance_levels.is_empty());

    assert!(prediction.weighted_score > 0.4);
    assert!((prediction.weighted_score - 4.36 / 8.8).abs() < 1e-9);
    assert_eq!(prediction.action, Action::Buy);
    assert!(prediction.risk_score < 60.0);
    assert!((prediction.targets.risk_reward - 0.75).abs() < 1e-9);
}

#[test]
fn test_steady_downtrend_is_a_sell() {
    let service = PredictionService::new(Config::default());
    feed(&service, "DOWN", &falling(50));

    let prediction = service.predict("DOWN").unwrap();
    assert_eq!(prediction.indicators.trend, TrendLabel::StrongDown);
    assert!(prediction.indicators.rsi < 30.0);
    assert!(prediction.weighted_score < -0.4);
    assert!(matches!(prediction.action, Action::Sell | Action::StrongSell));

    let targets = &prediction.targets;
    assert!(targets.target1 < targets.current);
    assert!(targets.stop_loss > targets.current);
}

#[test]
fn test_signal_readings_cover_all_subsignals() {
    let service = PredictionService::new(Config::default());
    feed(&service, "UP", &rising(30));

    let prediction = service.predict("UP").unwrap();
    let names: Vec<&str> = prediction.signals.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "RSI",
            "MACD",
            "Trend",
            "MA Alignment",
            "Bollinger Bands",
            "Momentum",
            "Volume",
            "Support/Resistance"
        ]
    );
    assert!(prediction.signals.iter().all(|s| !s.explanation.is_empty()));

    let ids: Vec<&str> = prediction.signals.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "rsi",
            "macd",
            "trend",
            "ma_alignment",
            "bollinger",
            "momentum",
            "volume",
            "levels"
        ]
    );
}

// =========================================================================
// Bounds and determinism
// =========================================================================

#[test]
fn test_confidence_and_risk_bounds() {
    let service = PredictionService::new(Config::default());
    let series: Vec<(&str, Vec<f64>)> = vec![
        ("UP", rising(60)),
        ("DOWN", falling(60)),
        ("FLAT", vec![42.0; 40]),
        (
            "SAW",
            (0..80).map(|i| if i % 2 == 0 { 100.0 } else { 130.0 }).collect(),
        ),
        (
            "CRASH",
            (0..40).map(|i| if i < 30 { 100.0 } else { 100.0 * 0.7f64.powi(i - 29) }).collect(),
        ),
    ];

    for (symbol, prices) in &series {
        feed(&service, symbol, prices);
        let p = service.predict(symbol).unwrap();
        assert!(
            (50.0..=95.0).contains(&p.confidence),
            "{} confidence {}",
            symbol,
            p.confidence
        );
        assert!(
            (0.0..=100.0).contains(&p.risk_score),
            "{} risk {}",
            symbol,
            p.risk_score
        );
        assert!((0.0..=100.0).contains(&p.indicators.rsi));
        assert!((0.0..=100.0).contains(&p.indicators.stoch_rsi));
    }
}

#[test]
fn test_repeated_predictions_are_identical() {
    let service = PredictionService::new(Config::default());
    feed(&service, "SOL", &rising(45));

    let first = service.predict("SOL").unwrap();
    let second = service.predict("SOL").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_same_ticks_same_decision() {
    let prices: Vec<f64> = (0..70)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
        .collect();

    let a = PredictionService::new(Config::default());
    let b = PredictionService::new(Config::default());
    feed(&a, "X", &prices);
    feed(&b, "X", &prices);

    let pa = a.predict("X").unwrap();
    let pb = b.predict("X").unwrap();
    assert_eq!(
        (pa.action, pa.confidence, pa.risk_score),
        (pb.action, pb.confidence, pb.risk_score)
    );
}

#[test]
fn test_evicted_sample_no_longer_counts() {
    // 201 samples: an outlier first, then a plain series
    let mut prices = vec![1000.0];
    prices.extend((0..200).map(|i| 100.0 + (i % 7) as f64));

    let full = PredictionService::new(Config::default());
    for (i, &p) in prices.iter().enumerate() {
        full.record_tick("ETH", p, 1000.0, Some(ts(i as i64)));
    }

    let trimmed = PredictionService::new(Config::default());
    for (i, &p) in prices.iter().enumerate().skip(1) {
        trimmed.record_tick("ETH", p, 1000.0, Some(ts(i as i64)));
    }

    assert_eq!(full.sample_count("ETH"), 200);
    assert_eq!(
        full.indicators("ETH").unwrap(),
        trimmed.indicators("ETH").unwrap()
    );
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn test_prediction_json_shape() {
    let service = PredictionService::new(Config::default());
    feed(&service, "UP", &rising(50));

    let json = serde_json::to_value(service.predict("UP").unwrap()).unwrap();
    assert_eq!(json["symbol"], "UP");
    assert_eq!(json["action"], "BUY");
    assert_eq!(json["actionKind"], "BUY");
    assert!(json["indicators"]["movingAverages"]["sma5"].is_number());
    assert!(json["indicators"]["changes"]["5"].is_number());
    assert!(json["targets"]["stopLoss"].is_number());
    assert_eq!(json["signals"][0]["id"], "rsi");

    // Confidence is rendered with one decimal place
    let confidence = json["confidence"].as_f64().unwrap();
    assert_eq!(confidence, (confidence * 10.0).round() / 10.0);
}

#[test]
fn test_analysis_and_statistics() {
    let service = PredictionService::new(Config::default());
    feed(&service, "UP", &rising(30));
    feed(&service, "WARM", &[10.0; 3]);

    let report = service.analysis("UP").unwrap();
    let stats = report.statistics.unwrap();
    assert_eq!(stats.data_points, 30);
    assert_eq!(stats.price_trend, PriceDirection::Up);
    assert_eq!(report.market_summary.unwrap().total_symbols, 2);
}
