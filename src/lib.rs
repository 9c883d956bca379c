//! Distcache - a TTL-aware distributed cache facade
//!
//! Provides get/set/refresh/remove with absolute and sliding expiration
//! enforced by the facade, over a pluggable key/value backing store.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::{CacheEntry, DistributedCache, EntryOptions};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use store::{CacheStore, DocumentCodec, MemoryStore};
pub use tasks::spawn_sweeper_task;
