//! Document Mapping Module
//!
//! Translates cache entries to and from the JSON documents a
//! document-oriented backend persists. The attribute names for the
//! partition key and the store-side TTL hint come from configuration,
//! matching however the target container was provisioned.

use serde_json::Value;

use crate::cache::CacheEntry;
use crate::error::{CacheError, Result};

// == Document Codec ==
/// Encodes entries as JSON documents with configurable attribute names.
#[derive(Debug, Clone)]
pub struct DocumentCodec {
    partition_key_attribute: String,
    ttl_attribute: String,
}

impl DocumentCodec {
    // == Constructor ==
    /// Creates a codec writing the given partition-key and TTL attributes.
    pub fn new(partition_key_attribute: impl Into<String>, ttl_attribute: impl Into<String>) -> Self {
        Self {
            partition_key_attribute: partition_key_attribute.into(),
            ttl_attribute: ttl_attribute.into(),
        }
    }

    // == Encode ==
    /// Renders an entry as a JSON document.
    ///
    /// The partition-key attribute carries the entry key (entries are
    /// partitioned by key). The TTL attribute carries the remaining
    /// effective lifetime at `now_ms`, rounded up to whole seconds, so
    /// backends with native TTL support can reclaim the document on their
    /// own. The hint is advisory; the facade never relies on it for
    /// correctness. Entries without expiration bounds carry no TTL
    /// attribute.
    pub fn encode(&self, entry: &CacheEntry, now_ms: u64) -> Result<Value> {
        let mut doc = serde_json::to_value(entry).map_err(CacheError::backing)?;

        if let Value::Object(obj) = &mut doc {
            obj.insert(
                self.partition_key_attribute.clone(),
                Value::String(entry.key.clone()),
            );
            if let Some(remaining_ms) = entry.ttl_remaining_ms(now_ms) {
                let remaining_secs = (remaining_ms + 999) / 1000;
                obj.insert(self.ttl_attribute.clone(), Value::from(remaining_secs));
            }
        }

        Ok(doc)
    }

    // == Decode ==
    /// Parses an entry back out of a stored document.
    ///
    /// Backend-managed attributes (the partition key, the TTL hint, etag or
    /// timestamp fields the database adds) are ignored.
    pub fn decode(&self, doc: Value) -> Result<CacheEntry> {
        serde_json::from_value(doc).map_err(CacheError::backing)
    }
}
