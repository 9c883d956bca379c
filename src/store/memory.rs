//! In-Memory Store Module
//!
//! HashMap-backed [`CacheStore`] used as the reference backend for tests
//! and single-process deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{policy, CacheEntry};
use crate::error::Result;
use crate::store::CacheStore;

// == Memory Store ==
/// In-process backing store holding entries in a HashMap behind an async
/// read/write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Current number of physically stored entries, including entries the
    /// facade would already treat as expired.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Sweep Expired ==
    /// Physically removes entries whose effective expiry has passed.
    ///
    /// Space reclamation only: the facade's lazy deletion already
    /// guarantees expired entries are never served.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep_expired(&self, now_ms: u64) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !policy::is_expired(entry, now_ms));
        before - entries.len()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<CacheEntry>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, entry: CacheEntry) -> Result<()> {
        self.entries.write().await.insert(entry.key.clone(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
