//! Day arithmetic shared by scoring and report assembly.

use chrono::{DateTime, Utc};

/// Milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed between `then` and `now`, rounded down.
///
/// Timestamps in the future yield negative values.
#[must_use]
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}
