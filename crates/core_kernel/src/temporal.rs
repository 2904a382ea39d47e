//! Calendar helpers
//!
//! Ages and elapsed-day counts are computed against an explicit reference
//! instant, never an ambient "now", so callers decide which clock applies.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Whole years between a birth date and a reference date
///
/// The year is not counted until the anniversary (month and day) has been
/// reached in the reference year.
pub fn age_in_years(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Whole days elapsed from `earlier` to `later`, rounded toward negative infinity
///
/// A span of 29 days and 23 hours counts as 29; a span of minus one hour
/// counts as minus one day.
pub fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let elapsed = later - earlier;
    let days = elapsed.num_days();
    if elapsed < chrono::Duration::days(days) {
        days - 1
    } else {
        days
    }
}
