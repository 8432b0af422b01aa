//! Next birthday projection.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::age::is_leap_year;

/// The next occurrence of a birthday on or after a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBirthday {
    pub date: NaiveDate,
    /// Calendar days from today's date to `date`, which is the partial day
    /// rounded up. Zero on the birthday itself.
    pub days_until: i64,
    /// Age in years reached on `date`.
    pub age_at_occurrence: i32,
}

impl NextBirthday {
    /// Projects the next birthday of someone born on `birth`.
    ///
    /// The birthday falling on today's calendar date is the current
    /// occurrence (`days_until == 0`), except on the day of birth itself,
    /// when the first birthday a year later is returned. February 29
    /// birthdays are observed on March 1 in common years, but March 1 itself
    /// is never counted as the birthday: from that day on the next
    /// occurrence is projected.
    pub fn project(birth: NaiveDate, now: NaiveDateTime) -> Self {
        let today = now.date();
        let mut year = today.year();
        let mut candidate = occurrence_in(birth, year);
        let on_birthday = (today.month(), today.day()) == (birth.month(), birth.day());

        if candidate < today || (candidate == today && !on_birthday) || year <= birth.year() {
            year += 1;
            candidate = occurrence_in(birth, year);
        }

        Self {
            date: candidate,
            days_until: (candidate - today).num_days(),
            age_at_occurrence: year - birth.year(),
        }
    }
}

/// The date in `year` on which the birthday is observed.
fn occurrence_in(birth: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = if birth.month() == 2 && birth.day() == 29 && !is_leap_year(year) {
        (3, 1)
    } else {
        (birth.month(), birth.day())
    };
    // Every (month, day) left here exists in `year`.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(birth)
}
