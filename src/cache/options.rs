//! Entry Options Module
//!
//! Immutable per-entry expiration configuration, mirroring the common
//! distributed-cache contract: absolute expiration, absolute expiration
//! relative to now, and sliding expiration.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Entry Options ==
/// Expiration configuration supplied with each `set` call.
///
/// All fields default to `None`, meaning the entry never expires. When both
/// `absolute_expiration` and `absolute_expiration_relative_to_now` are set,
/// the fixed wall-clock instant wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOptions {
    /// Hard wall-clock expiry; used verbatim when set
    pub absolute_expiration: Option<DateTime<Utc>>,
    /// Hard expiry computed as `now + duration` at set-time; ignored when
    /// `absolute_expiration` is also set
    pub absolute_expiration_relative_to_now: Option<Duration>,
    /// Window extended on every successful read
    pub sliding_expiration: Option<Duration>,
}

impl EntryOptions {
    // == Constructor ==
    /// Creates options with no expiration bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed wall-clock expiry.
    pub fn with_absolute_expiration(mut self, at: DateTime<Utc>) -> Self {
        self.absolute_expiration = Some(at);
        self
    }

    /// Sets a hard expiry relative to the time of the `set` call.
    pub fn with_absolute_expiration_relative_to_now(mut self, after: Duration) -> Self {
        self.absolute_expiration_relative_to_now = Some(after);
        self
    }

    /// Sets a sliding window that renews on every successful read.
    pub fn with_sliding_expiration(mut self, window: Duration) -> Self {
        self.sliding_expiration = Some(window);
        self
    }

    // == Never Expires ==
    /// True when no expiration bound is configured at all.
    pub fn never_expires(&self) -> bool {
        self.absolute_expiration.is_none()
            && self.absolute_expiration_relative_to_now.is_none()
            && self.sliding_expiration.is_none()
    }
}
