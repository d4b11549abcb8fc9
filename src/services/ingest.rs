//! Tick feed consumer.

use crate::services::PredictionService;
use crate::types::Tick;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// Apply ticks from a bounded feed in delivery order until every sender is
/// dropped.
///
/// Returns the number of ticks accepted. Ticks rejected as invalid are
/// received but not counted. A full channel makes senders wait, so nothing
/// is dropped in transit.
pub async fn run(service: Arc<PredictionService>, mut rx: mpsc::Receiver<Tick>) -> u64 {
    info!("Tick ingestion started");
    let mut received = 0u64;
    let mut applied = 0u64;

    while let Some(tick) = rx.recv().await {
        received += 1;
        if service.record(tick) {
            applied += 1;
        }
    }

    info!(
        "Tick channel closed: {} received, {} applied",
        received, applied
    );
    applied
}
