//! age.rs
//!
//! Calendar-correct age between a birth date and a reference instant.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the calendar-aware borrowing rules are implemented
//! here as a mixed-radix subtraction:
//!   • day underflow borrows one month, using the real length of the month
//!     before the reference month
//!   • month underflow borrows one year
//!   • leap years and varying month lengths fall out of `days_in_month`
//!
//! Raw totals (days, hours, minutes, seconds) come straight from the elapsed
//! duration and are independent of the borrow rules.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Age split into calendar units plus raw elapsed totals.
///
/// When the birth date is not after `now`, every field is non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    /// `total_days / 7`.
    pub weeks: i64,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

impl AgeBreakdown {
    /// Decomposes the time between local midnight of `birth` and `now`.
    pub fn between(birth: NaiveDate, now: NaiveDateTime) -> Self {
        let today = now.date();
        let mut years = today.year() - birth.year();
        let mut months = today.month() as i32 - birth.month() as i32;
        let mut days = today.day() as i32 - birth.day() as i32;

        // Fix day underflow
        if days < 0 {
            months -= 1;

            // Determine the previous month relative to `today`.
            let (prev_year, prev_month) = if today.month() == 1 {
                (today.year() - 1, 12)
            } else {
                (today.year(), today.month() - 1)
            };

            days += days_in_month(prev_year, prev_month) as i32;

            // Birth day past the end of a short borrowed month (Jan 31 to
            // Mar 1): borrow the month before it as well.
            if days < 0 {
                months -= 1;
                let (year, month) = if prev_month == 1 {
                    (prev_year - 1, 12)
                } else {
                    (prev_year, prev_month - 1)
                };
                days += days_in_month(year, month) as i32;
            }
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        let elapsed = now - birth.and_time(NaiveTime::MIN);
        let total_days = elapsed.num_days();

        Self {
            years,
            months,
            days,
            weeks: total_days / 7,
            total_days,
            total_hours: elapsed.num_hours(),
            total_minutes: elapsed.num_minutes(),
            total_seconds: elapsed.num_seconds(),
        }
    }

    /// Whole calendar months lived, `years * 12 + months`.
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }
}

impl fmt::Display for AgeBreakdown {
    /// Human age in the form "X years, Y months, Z days".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
