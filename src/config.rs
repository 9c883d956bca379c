//! Configuration Module
//!
//! Backing-store connection settings and facade tuning, loaded from
//! environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};
use crate::store::DocumentCodec;

/// Default bound applied to every backing-store call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

// == Cache Config ==
/// Connection and tuning parameters for a distributed cache instance.
///
/// The connection fields describe where the backing container lives; the
/// attribute names describe how cache documents are shaped inside it.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Endpoint of the backing database account
    pub connection_endpoint: String,
    /// Database holding the cache container
    pub database_name: String,
    /// Container (table) storing cache documents
    pub container_name: String,
    /// Document attribute used as the partition key
    pub partition_key_attribute: String,
    /// Document attribute carrying the store-side TTL hint
    pub ttl_attribute: String,
    /// Upper bound for each backing-store operation
    pub operation_timeout: Duration,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config from the required connection fields, with defaults
    /// for the attribute names and the operation timeout.
    pub fn new(
        connection_endpoint: impl Into<String>,
        database_name: impl Into<String>,
        container_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_endpoint: connection_endpoint.into(),
            database_name: database_name.into(),
            container_name: container_name.into(),
            partition_key_attribute: "id".to_string(),
            ttl_attribute: "ttl".to_string(),
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        }
    }

    /// Loads configuration from environment variables and validates it.
    ///
    /// # Environment Variables
    /// - `CACHE_CONNECTION_ENDPOINT` - Backing database endpoint (required)
    /// - `CACHE_DATABASE_NAME` - Database name (required)
    /// - `CACHE_CONTAINER_NAME` - Container name (required)
    /// - `CACHE_PARTITION_KEY_ATTRIBUTE` - Partition key attribute (default: "id")
    /// - `CACHE_TTL_ATTRIBUTE` - TTL hint attribute (default: "ttl")
    /// - `CACHE_OPERATION_TIMEOUT_MS` - Per-operation timeout in milliseconds (default: 5000)
    pub fn from_env() -> Result<Self> {
        let config = Self {
            connection_endpoint: env::var("CACHE_CONNECTION_ENDPOINT").unwrap_or_default(),
            database_name: env::var("CACHE_DATABASE_NAME").unwrap_or_default(),
            container_name: env::var("CACHE_CONTAINER_NAME").unwrap_or_default(),
            partition_key_attribute: env::var("CACHE_PARTITION_KEY_ATTRIBUTE")
                .unwrap_or_else(|_| "id".to_string()),
            ttl_attribute: env::var("CACHE_TTL_ATTRIBUTE").unwrap_or_else(|_| "ttl".to_string()),
            operation_timeout: env::var("CACHE_OPERATION_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_OPERATION_TIMEOUT),
        };
        config.validate()?;
        Ok(config)
    }

    // == Validate ==
    /// Checks that all required fields are present and usable.
    ///
    /// # Errors
    /// Returns [`CacheError::Configuration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("connection_endpoint", &self.connection_endpoint),
            ("database_name", &self.database_name),
            ("container_name", &self.container_name),
            ("partition_key_attribute", &self.partition_key_attribute),
            ("ttl_attribute", &self.ttl_attribute),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(CacheError::Configuration(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        if self.operation_timeout.is_zero() {
            return Err(CacheError::Configuration(
                "operation_timeout must be positive".to_string(),
            ));
        }
        Ok(())
    }

    // == Document Codec ==
    /// Builds the document codec matching the configured attribute names.
    pub fn document_codec(&self) -> DocumentCodec {
        DocumentCodec::new(
            self.partition_key_attribute.clone(),
            self.ttl_attribute.clone(),
        )
    }
}
