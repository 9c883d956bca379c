//! Expired Entry Sweeper
//!
//! Background task that periodically removes physically expired entries
//! from a [`MemoryStore`]. Space reclamation only: the facade's lazy
//! deletion is what guarantees expired entries are never served.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::store::MemoryStore;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for the given interval
/// between sweeps. Abort the returned handle during shutdown.
///
/// # Arguments
/// * `store` - Shared reference to the in-memory store
/// * `clock` - Time source for expiry decisions
/// * `sweep_interval` - Time between sweep runs
///
/// # Example
/// ```ignore
/// let store = Arc::new(MemoryStore::new());
/// let handle = spawn_sweeper_task(store.clone(), Arc::new(SystemClock), Duration::from_secs(60));
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_sweeper_task(
    store: Arc<MemoryStore>,
    clock: Arc<dyn Clock>,
    sweep_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expired-entry sweeper with interval of {:?}", sweep_interval);

        loop {
            tokio::time::sleep(sweep_interval).await;

            let removed = store.sweep_expired(clock.now_ms()).await;

            if removed > 0 {
                info!("Sweeper removed {} expired entries", removed);
            } else {
                debug!("Sweeper found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheEntry;
    use crate::clock::ManualClock;
    use crate::store::CacheStore;

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_000));

        store
            .write(CacheEntry::new(
                "expire_soon".to_string(),
                vec![1],
                1_000,
                Some(2_000),
                None,
            ))
            .await
            .unwrap();

        let handle = spawn_sweeper_task(store.clone(), clock.clone(), Duration::from_millis(50));

        // Entry becomes expired once the clock passes its cap
        clock.set(3_000);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(store.is_empty().await, "expired entry should be swept");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_live_entries() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_000));

        store
            .write(CacheEntry::new(
                "long_lived".to_string(),
                vec![1],
                1_000,
                Some(1_000_000),
                None,
            ))
            .await
            .unwrap();

        let handle = spawn_sweeper_task(store.clone(), clock.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.len().await, 1, "live entry should survive sweeps");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(ManualClock::new(1_000));

        let handle = spawn_sweeper_task(store, clock, Duration::from_millis(50));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
