//! # Time Predicates
//!
//! Elapsed-time checks over epoch-millisecond timestamps.
//!
//! ## Whole Units Only
//! ```text
//! elapsed = now - since
//!
//! has_been_hours(since, now, 1)
//!   elapsed = 59m 59s  →  0 whole hours  →  false
//!   elapsed = 1h 00m   →  1 whole hour   →  true
//! ```
//! Integer division truncates towards zero. A `since` in the future gives
//! negative elapsed units, so it never satisfies a non-negative threshold.

use chrono::{TimeZone, Timelike};

/// Milliseconds in one hour.
pub const HOUR_MILLIS: i64 = 60 * 60 * 1000;

/// Milliseconds in one day.
pub const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// Whether at least `hours` whole hours have passed since `since`.
#[inline]
pub fn has_been_hours(since: i64, now: i64, hours: i64) -> bool {
    now.saturating_sub(since) / HOUR_MILLIS >= hours
}

/// Whether at least `days` whole days have passed since `since`.
#[inline]
pub fn has_been_days(since: i64, now: i64, days: i64) -> bool {
    now.saturating_sub(since) / DAY_MILLIS >= days
}

/// Hour of day (0-23) of `now` in the given time zone.
///
/// Returns `None` when the instant cannot be represented in `tz`.
pub fn local_hour<Tz: TimeZone>(tz: &Tz, now: i64) -> Option<u32> {
    tz.timestamp_millis_opt(now).earliest().map(|dt| dt.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_has_been_hours_boundary() {
        let t0 = 1_700_000_000_000;
        assert!(!has_been_hours(t0, t0 + HOUR_MILLIS - 1, 1));
        assert!(has_been_hours(t0, t0 + HOUR_MILLIS, 1));
        assert!(has_been_hours(t0, t0, 0));
    }

    #[test]
    fn test_has_been_days_boundary() {
        let t0 = 1_700_000_000_000;
        assert!(!has_been_days(t0, t0 + 7 * DAY_MILLIS - 1, 7));
        assert!(has_been_days(t0, t0 + 7 * DAY_MILLIS, 7));
    }

    #[test]
    fn test_zero_since_means_long_ago() {
        assert!(has_been_days(0, 1_700_000_000_000, 42));
    }

    #[test]
    fn test_future_since_never_elapsed() {
        let now = 1_700_000_000_000;
        assert!(!has_been_hours(now + 5 * HOUR_MILLIS, now, 1));
        assert!(!has_been_hours(now + 5 * HOUR_MILLIS, now, 0));
        assert!(!has_been_days(now + DAY_MILLIS, now, 0));
        // Less than one unit ahead truncates to zero
        assert!(has_been_hours(now + HOUR_MILLIS - 1, now, 0));
    }

    #[test]
    fn test_local_hour_respects_offset() {
        // 2024-01-01T17:30:00Z
        let now = 1_704_130_200_000;
        assert_eq!(local_hour(&Utc, now), Some(17));

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(local_hour(&plus_two, now), Some(19));
    }
}
