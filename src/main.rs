use augur::services::ingest;
use augur::{Config, PredictionService, Tick};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Starting Augur (history {}, summary every {}s)",
        config.history_size, config.summary_interval_secs
    );

    let (tick_tx, tick_rx) = mpsc::channel::<Tick>(config.channel_capacity);
    let summary_interval = Duration::from_secs(config.summary_interval_secs);
    let service = PredictionService::new(config);

    let ingest_handle = tokio::spawn(ingest::run(service.clone(), tick_rx));
    let summary_handle = tokio::spawn(log_summaries(service.clone(), summary_interval));

    // One JSON tick per line on stdin
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0u64;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Tick>(line) {
            Ok(tick) => {
                // Waits while the channel is full
                if tick_tx.send(tick).await.is_err() {
                    warn!("Tick consumer stopped, ending input");
                    break;
                }
            }
            Err(e) => warn!("Skipping line {}: {}", line_no, e),
        }
    }
    drop(tick_tx);

    let applied = ingest_handle.await?;
    summary_handle.abort();
    info!("Input finished: {} ticks applied", applied);

    let predictions: Vec<_> = service
        .symbols()
        .iter()
        .filter_map(|symbol| match service.predict(symbol) {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                debug!("{}", e);
                None
            }
        })
        .collect();

    let report = json!({
        "marketSummary": service.market_summary(),
        "predictions": predictions,
        "opportunities": service.default_opportunities(),
        "riskAlerts": service.risk_alerts(),
        "accuracy": service.accuracy(None)?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Log a one-line market summary on a fixed interval.
async fn log_summaries(service: Arc<PredictionService>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    // First tick fires immediately
    interval.tick().await;

    loop {
        interval.tick().await;
        match service.market_summary() {
            Some(summary) => info!(
                "Market: {} symbols ({} ready), sentiment {} ({}), phase {}, RSI {:.1}",
                summary.total_symbols,
                service.ready_count(),
                summary.sentiment.label(),
                summary.sentiment_score,
                summary.market_phase.label(),
                summary.market_rsi
            ),
            None => debug!("No symbols recorded yet"),
        }
    }
}
