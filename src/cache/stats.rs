//! Cache Statistics Module
//!
//! Tracks facade-level metrics: hits, misses, and reads that found an
//! expired entry.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Concurrent hit/miss counters held by the facade.
///
/// Counters are atomic so every facade method can stay `&self`.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates new stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Counts a read that returned a live value.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Counts a read that found no entry.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Expiration ==
    /// Counts a read that found an expired entry. Also counted as a miss,
    /// since the caller observed "no value".
    pub fn record_expiration(&self) {
        self.expirations.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of all counters.
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }
}

// == Stats Snapshot ==
/// Serializable point-in-time view of the cache counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    /// Number of reads that returned a live value
    pub hits: u64,
    /// Number of reads that returned no value (absent or expired)
    pub misses: u64,
    /// Number of reads that found an expired entry
    pub expirations: u64,
}

impl CacheStatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
