//! Expiration Policy Module
//!
//! Translates entry options into expiration bounds and enforces absolute
//! and sliding expiration semantics.
//!
//! Boundary condition: an entry is considered expired when the current time
//! is greater than or equal to its effective expiry. This ensures that once
//! the configured lifetime has fully elapsed, the entry is immediately
//! expired.

use crate::cache::{CacheEntry, EntryOptions};
use crate::error::{CacheError, Result};

// == Expiry Metadata ==
/// Expiration bounds computed from entry options at set-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryMetadata {
    /// Hard expiry cap (Unix milliseconds), None = no absolute bound
    pub absolute_expires_at: Option<u64>,
    /// Sliding window in milliseconds, None = no sliding expiration
    pub sliding_window_ms: Option<u64>,
}

// == Compute Expiry ==
/// Validates `options` against `now_ms` and computes expiration bounds.
///
/// A fixed wall-clock expiration is used verbatim and must lie strictly
/// after `now_ms`; otherwise a relative-to-now duration is added to
/// `now_ms`. Relative and sliding durations must be positive. With neither
/// bound configured the entry never expires.
///
/// # Errors
/// Returns [`CacheError::InvalidOptions`] for an absolute expiration that is
/// not in the future, or a non-positive relative or sliding duration.
pub fn compute_expiry(options: &EntryOptions, now_ms: u64) -> Result<ExpiryMetadata> {
    let absolute_expires_at = if let Some(at) = options.absolute_expiration {
        let at_ms = at.timestamp_millis();
        if at_ms <= now_ms as i64 {
            return Err(CacheError::InvalidOptions(format!(
                "Absolute expiration {} is not after the current time",
                at.to_rfc3339()
            )));
        }
        Some(at_ms as u64)
    } else if let Some(after) = options.absolute_expiration_relative_to_now {
        let after_ms = after.as_millis() as u64;
        if after_ms == 0 {
            return Err(CacheError::InvalidOptions(
                "Relative expiration must be positive".to_string(),
            ));
        }
        Some(now_ms.saturating_add(after_ms))
    } else {
        None
    };

    let sliding_window_ms = match options.sliding_expiration {
        Some(window) => {
            let window_ms = window.as_millis() as u64;
            if window_ms == 0 {
                return Err(CacheError::InvalidOptions(
                    "Sliding expiration must be positive".to_string(),
                ));
            }
            Some(window_ms)
        }
        None => None,
    };

    Ok(ExpiryMetadata {
        absolute_expires_at,
        sliding_window_ms,
    })
}

// == Renew On Access ==
/// Marks a successful read on `entry`.
///
/// With a sliding window present this moves `last_accessed_at` to `now_ms`,
/// which shifts the sliding deadline to `now + window`; the absolute cap is
/// separate state, so the effective expiry stays
/// `min(cap, now + window)`. Without a sliding window this is a no-op.
///
/// # Returns
/// `true` if the entry was renewed and its metadata needs to be persisted.
pub fn renew_on_access(entry: &mut CacheEntry, now_ms: u64) -> bool {
    if entry.sliding_window_ms.is_none() {
        return false;
    }
    entry.last_accessed_at = now_ms;
    true
}

// == Is Expired ==
/// Checks whether `entry` is past its effective expiry at `now_ms`.
///
/// # Returns
/// - `true` if an effective expiry exists and `now_ms` >= expiry
/// - `false` if the entry has no expiration bounds or they have not elapsed
pub fn is_expired(entry: &CacheEntry, now_ms: u64) -> bool {
    match entry.effective_expires_at() {
        Some(expires) => now_ms >= expires,
        None => false,
    }
}
