//! Distributed Cache Facade
//!
//! Implements get/set/refresh/remove over an abstract backing store, with
//! absolute and sliding expiration enforced here rather than delegated to
//! the backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{
    policy, CacheEntry, CacheStats, CacheStatsSnapshot, EntryOptions, MAX_KEY_LENGTH,
    MAX_VALUE_SIZE,
};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::store::CacheStore;

// == Distributed Cache ==
/// Facade implementing the distributed-cache contract over a [`CacheStore`].
///
/// Expiration is enforced on the read path: an entry past its effective
/// expiry is never returned, even when the backend still physically holds
/// it. Entries with a sliding window incur a metadata write-back on every
/// successful read; that cost is part of the contract, not hidden.
///
/// All methods take `&self`, so one instance can be shared behind an
/// [`Arc`] by any number of concurrent callers. Two concurrent renewals of
/// the same key resolve last-writer-wins; per-key linearizability is out of
/// scope. Dropping a returned future cancels the in-flight store call, and
/// store writes are atomic at entry granularity, so cancellation never
/// leaves a partially written entry behind. Every store call is bounded by
/// the configured operation timeout.
pub struct DistributedCache {
    /// Handle to the backing key/value store
    store: Arc<dyn CacheStore>,
    /// Time source for expiration decisions
    clock: Arc<dyn Clock>,
    /// Upper bound applied to each backing-store call
    operation_timeout: Duration,
    /// Hit/miss counters
    stats: CacheStats,
}

impl DistributedCache {
    // == Constructor ==
    /// Creates a new facade over the given store and clock.
    ///
    /// # Arguments
    /// * `store` - The backing store handle
    /// * `clock` - Time source; [`SystemClock`] in production
    /// * `operation_timeout` - Upper bound for each backing-store call
    pub fn new(
        store: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
        operation_timeout: Duration,
    ) -> Self {
        Self {
            store,
            clock,
            operation_timeout,
            stats: CacheStats::new(),
        }
    }

    // == Shared Construction ==
    /// Builds the process-wide shared cache instance from configuration.
    ///
    /// Validates the configuration first, then wires the facade with the
    /// system clock and the configured operation timeout.
    ///
    /// # Errors
    /// Returns [`CacheError::Configuration`] when required fields are
    /// missing or invalid.
    pub fn shared(config: &CacheConfig, store: Arc<dyn CacheStore>) -> Result<Arc<Self>> {
        config.validate()?;
        Ok(Arc::new(Self::new(
            store,
            Arc::new(SystemClock),
            config.operation_timeout,
        )))
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Returns `Ok(None)` for absent and expired keys. An expired entry is
    /// lazily deleted from the backend on a best-effort basis; a failure of
    /// that delete is logged and swallowed because "no value" is already
    /// the correct answer. A live sliding entry is renewed and the renewed
    /// metadata written back before the value is returned; a write-back
    /// failure propagates as [`CacheError::BackingStore`].
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = self.clock.now_ms();

        let entry = self.bounded("read", self.store.read(key)).await?;
        let mut entry = match entry {
            Some(entry) => entry,
            None => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                return Ok(None);
            }
        };

        if policy::is_expired(&entry, now) {
            self.stats.record_expiration();
            debug!(key, "entry expired, deleting lazily");
            if let Err(err) = self.bounded("delete", self.store.delete(key)).await {
                warn!(key, error = %err, "lazy delete of expired entry failed");
            }
            return Ok(None);
        }

        if policy::renew_on_access(&mut entry, now) {
            self.bounded("write", self.store.write(entry.clone())).await?;
            debug!(key, "sliding window renewed on read");
        }

        self.stats.record_hit();
        Ok(Some(entry.value))
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any existing entry.
    ///
    /// Expiration bounds are computed from `options` up front; invalid keys
    /// or options fail locally with [`CacheError::InvalidOptions`] before
    /// any store I/O. Last writer wins; there is no version check.
    pub async fn set(&self, key: &str, value: Vec<u8>, options: &EntryOptions) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidOptions(
                "Key must not be empty".to_string(),
            ));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidOptions(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidOptions(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let now = self.clock.now_ms();
        let expiry = policy::compute_expiry(options, now)?;
        let entry = CacheEntry::new(
            key.to_string(),
            value,
            now,
            expiry.absolute_expires_at,
            expiry.sliding_window_ms,
        );

        self.bounded("write", self.store.write(entry)).await?;
        debug!(key, "entry stored");
        Ok(())
    }

    // == Refresh ==
    /// Advisory sliding-window renewal.
    ///
    /// Renews and writes back only when the entry exists, is still live,
    /// and carries a sliding window. An absent key, an expired entry, or a
    /// purely absolute entry is a no-op, mirroring the common
    /// distributed-cache contract where refresh is advisory.
    pub async fn refresh(&self, key: &str) -> Result<()> {
        let now = self.clock.now_ms();

        let entry = self.bounded("read", self.store.read(key)).await?;
        let mut entry = match entry {
            Some(entry) => entry,
            None => return Ok(()),
        };

        // An expired entry is logically absent; renewing it would
        // resurrect it past its window.
        if policy::is_expired(&entry, now) {
            return Ok(());
        }

        if policy::renew_on_access(&mut entry, now) {
            self.bounded("write", self.store.write(entry)).await?;
            debug!(key, "sliding window refreshed");
        }
        Ok(())
    }

    // == Remove ==
    /// Unconditional delete; removing an absent key succeeds.
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.bounded("delete", self.store.delete(key)).await?;
        debug!(key, "entry removed");
        Ok(())
    }

    // == Stats ==
    /// Returns a snapshot of the facade-level hit/miss counters.
    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    // == Bounded Store Call ==
    /// Runs one store operation under the configured timeout. An elapsed
    /// timeout surfaces as a backing-store failure with the bound attached.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::backing(anyhow::anyhow!(
                "{} timed out after {:?}",
                operation,
                self.operation_timeout
            ))),
        }
    }
}
