//! Field filter performance statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;

/// Statistics for field filter applications
#[derive(Debug)]
pub struct FilterStats {
    /// Number of select applications
    pub selections: AtomicU64,
    /// Number of exclude applications
    pub exclusions: AtomicU64,
    /// Number of selection walks that collapsed to `null`
    pub empty_selections: AtomicU64,
    /// Total fields removed by exclusions
    pub fields_removed: AtomicU64,
    /// Number of encoded documents processed
    pub documents_processed: AtomicU64,
    /// Total input bytes of processed documents
    pub bytes_processed: AtomicU64,
    /// Number of decode/encode failures
    pub errors: AtomicU64,
    /// Creation time
    pub start_time: Instant,
}

/// Point-in-time copy of [`FilterStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub selections: u64,
    pub exclusions: u64,
    pub empty_selections: u64,
    pub fields_removed: u64,
    pub documents_processed: u64,
    pub bytes_processed: u64,
    pub errors: u64,
}

impl Default for FilterStats {
    fn default() -> Self {
        Self {
            selections: AtomicU64::new(0),
            exclusions: AtomicU64::new(0),
            empty_selections: AtomicU64::new(0),
            fields_removed: AtomicU64::new(0),
            documents_processed: AtomicU64::new(0),
            bytes_processed: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }
}

impl FilterStats {
    /// Create new filter statistics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a select application and whether the walk collapsed it to `null`
    pub fn record_selection(&self, empty: bool) {
        self.selections.fetch_add(1, Ordering::Relaxed);
        if empty {
            self.empty_selections.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an exclude application and how many fields it removed
    pub fn record_exclusion(&self, removed: usize) {
        self.exclusions.fetch_add(1, Ordering::Relaxed);
        self.fields_removed
            .fetch_add(u64::try_from(removed).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    /// Record an encoded document of `bytes` length
    pub fn record_document(&self, bytes: usize) {
        self.documents_processed.fetch_add(1, Ordering::Relaxed);
        self.bytes_processed
            .fetch_add(u64::try_from(bytes).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    /// Record a decode or encode failure
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Time since these statistics were created
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Percentage of selections that produced `null`
    #[must_use]
    pub fn empty_selection_rate(&self) -> f64 {
        // Precision loss acceptable for rate statistics
        #[allow(clippy::cast_precision_loss)]
        let total = self.selections.load(Ordering::Relaxed) as f64;
        #[allow(clippy::cast_precision_loss)]
        let empty = self.empty_selections.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (empty / total) * 100.0
        } else {
            0.0
        }
    }

    /// Get statistics snapshot
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            selections: self.selections.load(Ordering::Relaxed),
            exclusions: self.exclusions.load(Ordering::Relaxed),
            empty_selections: self.empty_selections.load(Ordering::Relaxed),
            fields_removed: self.fields_removed.load(Ordering::Relaxed),
            documents_processed: self.documents_processed.load(Ordering::Relaxed),
            bytes_processed: self.bytes_processed.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
