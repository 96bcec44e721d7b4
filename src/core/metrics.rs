//! Pipeline metrics for observability
//!
//! Counters are updated with relaxed atomics: they are statistics, not
//! synchronization points.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what happened to submitted records.
///
/// # Example
///
/// ```
/// use log_pipeline::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_submitted();
/// metrics.record_emitted();
///
/// assert_eq!(metrics.submitted(), 1);
/// assert_eq!(metrics.emitted(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records handed to the queue by producers
    submitted: AtomicU64,

    /// Records that passed the threshold and reached the console sink
    emitted: AtomicU64,

    /// Records discarded by the threshold
    filtered: AtomicU64,

    /// Records lost to a failed push or a failing console sink
    dropped: AtomicU64,

    /// Failed truncations (`set_file`) and failed appends on the file sink
    file_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
            file_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_errors(&self) -> u64 {
        self.file_errors.load(Ordering::Relaxed)
    }

    /// Each `record_*` returns the previous value.
    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_error(&self) -> u64 {
        self.file_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Dropped records as a percentage (0.0 - 100.0) of emitted plus dropped.
    ///
    /// Returns 0.0 if nothing has been processed.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped() as f64;
        let total = self.emitted() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.file_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            submitted: AtomicU64::new(self.submitted()),
            emitted: AtomicU64::new(self.emitted()),
            filtered: AtomicU64::new(self.filtered()),
            dropped: AtomicU64::new(self.dropped()),
            file_errors: AtomicU64::new(self.file_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.submitted(), 0);
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.dropped(), 0);
        assert_eq!(metrics.file_errors(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_dropped(), 0);
        assert_eq!(metrics.record_dropped(), 1);
        assert_eq!(metrics.dropped(), 2);
    }

    #[test]
    fn test_drop_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.drop_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_emitted();
        }
        for _ in 0..10 {
            metrics.record_dropped();
        }

        let rate = metrics.drop_rate();
        assert!((9.9..=10.1).contains(&rate), "Drop rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_submitted();
        metrics.record_filtered();
        metrics.record_file_error();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.submitted(), 0);
        assert_eq!(metrics.file_errors(), 0);
        assert_eq!(snapshot.submitted(), 1);
        assert_eq!(snapshot.filtered(), 1);
        assert_eq!(snapshot.file_errors(), 1);
    }
}
