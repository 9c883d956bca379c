//! Store Module
//!
//! The capability interface between the cache facade and the backing
//! key/value database, the bundled in-memory implementation, and the JSON
//! document mapping used by document-oriented backends.

mod document;
mod memory;

// Re-export public types
pub use document::DocumentCodec;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::cache::CacheEntry;
use crate::error::Result;

// == Cache Store Trait ==
/// Narrow capability abstracting the backing key/value database.
///
/// Implementations must be safe for concurrent use and must keep each
/// `write` atomic at the granularity of one full entry. Callers cancel an
/// in-flight operation by dropping its future; an implementation must not
/// leave a partially written entry behind in that case.
///
/// All failures surface as [`crate::error::CacheError::BackingStore`] with
/// the underlying cause attached.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Point lookup by key. An absent key is `Ok(None)`, not an error.
    async fn read(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Upsert: inserts the entry or overwrites an existing one with the
    /// same key.
    async fn write(&self, entry: CacheEntry) -> Result<()>;

    /// Idempotent delete; removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
