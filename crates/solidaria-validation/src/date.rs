//! Birth-date parsing and age checks
//!
//! The signup form only accepts registrants who are at least 18 years old.
//! "Today" is always supplied by the caller so the rule stays deterministic
//! under test.

use chrono::{Datelike, NaiveDate};

/// Minimum age the signup form accepts
pub const MINIMUM_AGE: i32 = 18;

/// Parses the wire format of an HTML date input (`YYYY-MM-DD`)
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Completed years between `birth` and `today`
///
/// The year difference drops by one while the birthday is still ahead in the
/// current year. A birthday falling on `today` counts as completed.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Whether someone born on `birth` has reached [`MINIMUM_AGE`] by `today`
pub fn is_adult_on(birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth, today) >= MINIMUM_AGE
}
