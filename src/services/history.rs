//! Bounded per-symbol sample history.

use crate::types::Sample;
use std::collections::VecDeque;

/// Default number of samples retained per symbol.
pub const DEFAULT_CAPACITY: usize = 200;

/// Rolling window of samples for one symbol, oldest first.
#[derive(Debug, Clone)]
pub struct SymbolHistory {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for SymbolHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SymbolHistory {
    /// Create an empty history retaining at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);

        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Copy of the current window in chronological order.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(i: usize) -> Sample {
        Sample::new(
            100.0 + i as f64,
            1000.0,
            Utc.timestamp_millis_opt(1_000_000 + i as i64 * 1000).unwrap(),
        )
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = SymbolHistory::new(10);
        for i in 0..5 {
            history.append(sample(i));
        }
        let prices: Vec<f64> = history.snapshot().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    }

    #[test]
    fn test_append_evicts_oldest_at_capacity() {
        let mut history = SymbolHistory::new(3);
        for i in 0..5 {
            history.append(sample(i));
        }
        assert_eq!(history.len(), 3);
        let prices: Vec<f64> = history.snapshot().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![102.0, 103.0, 104.0]);
    }

    #[test]
    fn test_default_capacity() {
        let mut history = SymbolHistory::default();
        assert_eq!(history.capacity(), 200);
        for i in 0..201 {
            history.append(sample(i));
        }
        assert_eq!(history.len(), 200);
        assert_eq!(history.snapshot()[0].price, 101.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut history = SymbolHistory::new(5);
        history.append(sample(0));
        let snapshot = history.snapshot();
        history.append(sample(1));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = SymbolHistory::new(0);
        history.append(sample(0));
        history.append(sample(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().map(|s| s.price), Some(101.0));
    }

    #[test]
    fn test_empty_history() {
        let history = SymbolHistory::new(5);
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.snapshot().is_empty());
    }
}
