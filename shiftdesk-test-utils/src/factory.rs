//! Pure functions producing values for tests without touching the database.

use chrono::{NaiveDate, NaiveDateTime};

/// A fixed point in time on 2026-06-`day` at `hour`:00.
///
/// Shift fixtures use this so ordering and overlap assertions are stable across runs.
///
/// # Panics
/// Panics when `day` or `hour` is out of range, which is a bug in the calling test.
pub fn datetime(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid fixture datetime")
}

/// A fixed date in 2026.
///
/// # Panics
/// Panics when `month` or `day` is out of range.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).expect("valid fixture date")
}
