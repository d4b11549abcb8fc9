//! Volume ratio against the recent average.

use super::sma::sma;

/// Default volume averaging window.
pub const VOLUME_PERIOD: usize = 20;

/// Latest volume divided by the mean of the last `period` volumes.
/// Returns 1 when the average is zero.
pub fn volume_ratio(volumes: &[f64], period: usize) -> f64 {
    let Some(&latest) = volumes.last() else {
        return 1.0;
    };
    let average = sma(volumes, period);
    if average > 0.0 {
        latest / average
    } else {
        1.0
    }
}
