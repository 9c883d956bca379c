//! Property-Based Tests for the Expiration Core
//!
//! Uses proptest to verify the expiration-policy correctness properties.

use proptest::prelude::*;
use std::time::Duration;

use chrono::DateTime;

use crate::cache::{policy, CacheEntry, EntryOptions};
use crate::error::CacheError;

// == Test Configuration ==
/// Timestamps stay inside a plausible wall-clock range (2001..2033) so
/// conversions to chrono instants never overflow.
const NOW_RANGE: std::ops::Range<u64> = 1_000_000_000_000..2_000_000_000_000;

fn sliding_entry(now: u64, cap: Option<u64>, window: u64) -> CacheEntry {
    CacheEntry::new("k".to_string(), vec![1], now, cap, Some(window))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Property: an entry set with only a relative expiration `d` is live
    // strictly before `now + d` and expired at and after `now + d`.
    #[test]
    fn prop_relative_expiry_boundary(
        now in NOW_RANGE,
        d in 1u64..86_400_000,
        overshoot in 0u64..200_000,
    ) {
        let options = EntryOptions::new()
            .with_absolute_expiration_relative_to_now(Duration::from_millis(d));
        let meta = policy::compute_expiry(&options, now).unwrap();
        prop_assert_eq!(meta.absolute_expires_at, Some(now + d));
        prop_assert_eq!(meta.sliding_window_ms, None);

        let entry = CacheEntry::new(
            "k".to_string(),
            vec![1],
            now,
            meta.absolute_expires_at,
            meta.sliding_window_ms,
        );
        prop_assert!(!policy::is_expired(&entry, now + d - 1));
        prop_assert!(policy::is_expired(&entry, now + d));
        prop_assert!(policy::is_expired(&entry, now + d + overshoot));
    }

    // Property: a fixed wall-clock expiration is used verbatim, and always
    // wins over a simultaneously configured relative duration.
    #[test]
    fn prop_absolute_wins_over_relative(
        now in NOW_RANGE,
        abs_delta in 1u64..86_400_000,
        rel in 1u64..86_400_000,
    ) {
        let at = DateTime::from_timestamp_millis((now + abs_delta) as i64).unwrap();
        let options = EntryOptions::new()
            .with_absolute_expiration(at)
            .with_absolute_expiration_relative_to_now(Duration::from_millis(rel));

        let meta = policy::compute_expiry(&options, now).unwrap();
        prop_assert_eq!(meta.absolute_expires_at, Some(now + abs_delta));
    }

    // Property: for a sliding-only entry, each access before the window
    // elapses keeps the entry live and moves the deadline to
    // `access time + window`; the first gap >= window expires it.
    #[test]
    fn prop_sliding_entry_tracks_last_access(
        now in NOW_RANGE,
        window in 1u64..60_000,
        gaps in prop::collection::vec(0u64..120_000, 1..20),
    ) {
        let mut entry = sliding_entry(now, None, window);
        let mut t = now;
        let mut last_access = now;

        for gap in gaps {
            t += gap;
            let model_expired = t >= last_access + window;
            prop_assert_eq!(policy::is_expired(&entry, t), model_expired);
            if model_expired {
                // Logically absent from here on; a real read would never
                // renew it
                break;
            }
            prop_assert!(policy::renew_on_access(&mut entry, t));
            last_access = t;
            prop_assert_eq!(entry.effective_expires_at(), Some(last_access + window));
        }
    }

    // Property: with both bounds set, the effective expiry is the earlier
    // of the absolute cap and the sliding deadline.
    #[test]
    fn prop_effective_expiry_is_min_of_bounds(
        now in NOW_RANGE,
        cap_delta in 1u64..100_000,
        window in 1u64..100_000,
    ) {
        let entry = sliding_entry(now, Some(now + cap_delta), window);
        let expected = (now + cap_delta).min(now + window);
        prop_assert_eq!(entry.effective_expires_at(), Some(expected));
    }

    // Property: no sequence of renewals moves the effective expiry past
    // the absolute cap, and the entry is always expired once the cap
    // passes.
    #[test]
    fn prop_renewal_never_outlives_absolute_cap(
        now in NOW_RANGE,
        cap_delta in 1u64..100_000,
        window in 1u64..100_000,
        gaps in prop::collection::vec(0u64..50_000, 0..10),
    ) {
        let mut entry = sliding_entry(now, Some(now + cap_delta), window);
        let mut t = now;

        for gap in gaps {
            t += gap;
            if policy::is_expired(&entry, t) {
                break;
            }
            policy::renew_on_access(&mut entry, t);
            prop_assert!(entry.effective_expires_at().unwrap() <= now + cap_delta);
        }

        prop_assert!(policy::is_expired(&entry, now + cap_delta));
    }

    // Property: an entry with no expiration bounds never expires.
    #[test]
    fn prop_unbounded_entry_never_expires(
        now in NOW_RANGE,
        probe in any::<u64>(),
    ) {
        let meta = policy::compute_expiry(&EntryOptions::new(), now).unwrap();
        prop_assert_eq!(meta.absolute_expires_at, None);
        prop_assert_eq!(meta.sliding_window_ms, None);

        let entry = CacheEntry::new("k".to_string(), vec![1], now, None, None);
        prop_assert!(!policy::is_expired(&entry, probe));
    }

    // Property: an absolute expiration at or before `now` is rejected.
    #[test]
    fn prop_past_absolute_rejected(
        now in NOW_RANGE,
        back in 0u64..1_000_000,
    ) {
        let at = DateTime::from_timestamp_millis((now - back) as i64).unwrap();
        let options = EntryOptions::new().with_absolute_expiration(at);

        let result = policy::compute_expiry(&options, now);
        prop_assert!(matches!(result, Err(CacheError::InvalidOptions(_))));
    }
}
