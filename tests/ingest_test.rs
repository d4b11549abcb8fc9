//! Concurrent recording and channel-driven ingestion

use augur::services::{ingest, PredictionService};
use augur::{Config, Tick};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_symbols_stay_isolated() {
    let service = PredictionService::new(Config::default());

    let writer = |symbol: &'static str, base: f64| {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for i in 0..60 {
                let ts = Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap();
                service.record_tick(symbol, base + i as f64, 10.0, Some(ts));
                tokio::task::yield_now().await;
            }
        })
    };

    let a = writer("AAA", 100.0);
    let b = writer("BBB", 5000.0);
    a.await.unwrap();
    b.await.unwrap();

    let aaa = service.indicators("AAA").unwrap();
    let bbb = service.indicators("BBB").unwrap();

    let expected_a = mean(&[155.0, 156.0, 157.0, 158.0, 159.0]);
    let expected_b = mean(&[5055.0, 5056.0, 5057.0, 5058.0, 5059.0]);
    assert!((aaa.moving_averages.sma5 - expected_a).abs() < 1e-9);
    assert!((bbb.moving_averages.sma5 - expected_b).abs() < 1e-9);
    assert_eq!(service.sample_count("AAA"), 60);
    assert_eq!(service.sample_count("BBB"), 60);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_ticks_register_symbol_once() {
    const WRITERS: usize = 8;
    const TICKS_EACH: usize = 40;

    for capacity in [200, 500] {
        let config = Config {
            history_size: capacity,
            ..Config::default()
        };
        let service = PredictionService::new(config);
        let start = Arc::new(tokio::sync::Barrier::new(WRITERS));

        let handles: Vec<_> = (0..WRITERS)
            .map(|w| {
                let service = Arc::clone(&service);
                let start = Arc::clone(&start);
                tokio::spawn(async move {
                    start.wait().await;
                    for i in 0..TICKS_EACH {
                        assert!(service.record_tick("NEW", 100.0 + (w * i) as f64, 1.0, None));
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(service.symbols(), vec!["NEW".to_string()]);
        assert_eq!(
            service.sample_count("NEW"),
            (WRITERS * TICKS_EACH).min(capacity)
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_run_alongside_writers() {
    let service = PredictionService::new(Config::default());
    for i in 0..20 {
        service.record_tick("BTC", 100.0 + i as f64, 1.0, None);
    }

    let writer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for i in 0..500 {
                service.record_tick("BTC", 120.0 + (i % 10) as f64, 1.0, None);
                tokio::task::yield_now().await;
            }
        })
    };

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for _ in 0..100 {
                let prediction = service.predict("BTC").unwrap();
                assert!((50.0..=95.0).contains(&prediction.confidence));
                assert!(prediction.indicators.sample_count >= 20);
                assert!(prediction.indicators.sample_count <= 200);
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(service.sample_count("BTC"), 200);
}

#[tokio::test]
async fn test_feed_drives_predictions() {
    let service = PredictionService::new(Config::default());
    let (tx, rx) = mpsc::channel(16);
    let consumer = tokio::spawn(ingest::run(service.clone(), rx));

    for i in 0..50 {
        let ts = Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap();
        let price = 100.0 * 1.01f64.powi(i as i32);
        tx.send(Tick::new("UP", price, 1000.0).at(ts)).await.unwrap();
        tx.send(Tick::new("FLAT", 50.0, 1000.0).at(ts)).await.unwrap();
    }
    // Rejected at record time, not by the channel
    tx.send(Tick::new("UP", f64::NAN, 1.0)).await.unwrap();
    drop(tx);

    assert_eq!(consumer.await.unwrap(), 100);
    assert_eq!(service.sample_count("UP"), 50);

    let summary = service.market_summary().unwrap();
    assert_eq!(summary.total_symbols, 2);
    assert_eq!(summary.analyzed_symbols, 2);
    assert_eq!(summary.strong_rising, 1);
    assert_eq!(summary.neutral, 1);
}

#[test]
fn test_tick_json_defaults() {
    let tick: Tick = serde_json::from_str(r#"{"symbol":"BTC","price":42000.5}"#).unwrap();
    assert_eq!(tick.volume, 0.0);
    assert!(tick.timestamp.is_none());
    assert!(tick.is_valid());

    let tick: Tick = serde_json::from_str(
        r#"{"symbol":"ETH","price":2500.0,"volume":3.5,"timestamp":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert_eq!(tick.volume, 3.5);
    assert_eq!(
        tick.timestamp,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
}
