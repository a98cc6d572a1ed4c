//! Test utilities for the roster crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Epoch milliseconds reported by [`FixedClock`].
pub const FIXED_MILLIS: i64 = 1_704_067_200_000;

/// Clock pinned to [`FIXED_MILLIS`] so error timestamps are stable.
///
/// # Examples
///
/// ```rust
/// use mockable::Clock;
/// use roster::test_support::{FIXED_MILLIS, FixedClock};
///
/// assert_eq!(FixedClock.utc().timestamp_millis(), FIXED_MILLIS);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(FIXED_MILLIS).unwrap_or_default()
    }
}
