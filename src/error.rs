//! Error types for the distributed cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the distributed cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Entry options or key failed local validation; never worth retrying
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A backing-store operation failed; the underlying cause is attached.
    /// Retry policy belongs to the caller or the store implementation.
    #[error("Backing store operation failed: {0}")]
    BackingStore(#[source] anyhow::Error),

    /// Construction-time misconfiguration, fatal to startup
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CacheError {
    /// Wraps a backend failure, preserving the underlying cause.
    pub fn backing(err: impl Into<anyhow::Error>) -> Self {
        CacheError::BackingStore(err.into())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the distributed cache.
pub type Result<T> = std::result::Result<T, CacheError>;
