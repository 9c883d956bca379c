//! Cache Entry Module
//!
//! Defines the structure for stored cache entries with expiration metadata.

use serde::{Deserialize, Serialize};

// == Cache Entry ==
/// Represents a single cache entry with payload and expiration metadata.
///
/// Serializable so store implementations can persist entries as documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unique identifier; never empty, never mutated after creation
    pub key: String,
    /// Opaque payload bytes
    pub value: Vec<u8>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Last successful read (Unix milliseconds); drives sliding renewal
    pub last_accessed_at: u64,
    /// Hard expiry cap (Unix milliseconds), None = no absolute bound.
    /// Fixed at set-time; access never moves it.
    pub absolute_expires_at: Option<u64>,
    /// Sliding window in milliseconds, None = no sliding expiration
    pub sliding_window_ms: Option<u64>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with the given expiration bounds.
    ///
    /// # Arguments
    /// * `key` - The key the entry is stored under
    /// * `value` - The payload bytes
    /// * `now_ms` - Current time; becomes both `created_at` and `last_accessed_at`
    /// * `absolute_expires_at` - Optional hard expiry cap (Unix milliseconds)
    /// * `sliding_window_ms` - Optional sliding window in milliseconds
    pub fn new(
        key: String,
        value: Vec<u8>,
        now_ms: u64,
        absolute_expires_at: Option<u64>,
        sliding_window_ms: Option<u64>,
    ) -> Self {
        Self {
            key,
            value,
            created_at: now_ms,
            last_accessed_at: now_ms,
            absolute_expires_at,
            sliding_window_ms,
        }
    }

    // == Effective Expiry ==
    /// Returns the earliest applicable expiration bound.
    ///
    /// With both bounds set this is `min(absolute cap, last access + sliding
    /// window)`; with one bound set, that bound; with neither, the entry
    /// never expires.
    pub fn effective_expires_at(&self) -> Option<u64> {
        let sliding_deadline = self
            .sliding_window_ms
            .map(|window| self.last_accessed_at.saturating_add(window));

        match (self.absolute_expires_at, sliding_deadline) {
            (Some(cap), Some(deadline)) => Some(cap.min(deadline)),
            (Some(cap), None) => Some(cap),
            (None, Some(deadline)) => Some(deadline),
            (None, None) => None,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds at `now_ms`.
    ///
    /// # Returns
    /// - `Some(0)` once the effective expiry has passed
    /// - `Some(remaining_ms)` while the entry is live
    /// - `None` if the entry never expires
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.effective_expires_at()
            .map(|expires| expires.saturating_sub(now_ms))
    }
}
