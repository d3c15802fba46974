use chrono::{DateTime, Utc};

use crate::constants::SECONDS_PER_DAY;

/// Counts the days between two instants, rounding any partial day up.
///
/// This is the single source of truth for deriving day counts from the
/// date-range record shape. A span of zero or less counts as zero days.
pub fn days_between_ceil(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let secs = (end - start).num_seconds();
    if secs <= 0 {
        return 0;
    }
    secs.div_euclid(SECONDS_PER_DAY) + i64::from(secs.rem_euclid(SECONDS_PER_DAY) != 0)
}
