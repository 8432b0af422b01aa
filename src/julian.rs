//! Gregorian calendar date <-> Julian Day Number.
//!
//! Both directions use exact integer arithmetic. All divisions operate on
//! non-negative operands for any year after -4800, so truncating division
//! equals floor division.

use chrono::{Datelike, NaiveDate};

/// Julian Day Number of 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Converts a proleptic Gregorian date to its Julian Day Number.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Converts a [`NaiveDate`] to its Julian Day Number.
pub fn date_to_jdn(date: NaiveDate) -> i64 {
    gregorian_to_jdn(date.year(), date.month(), date.day())
}

/// Converts a Julian Day Number back to a proleptic Gregorian
/// `(year, month, day)`.
///
/// Exact inverse of [`gregorian_to_jdn`].
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_epochs() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_jdn(1970, 1, 1), UNIX_EPOCH_JDN);
        assert_eq!(gregorian_to_jdn(1900, 1, 1), 2_415_021);
        // Start of the Gregorian reform.
        assert_eq!(gregorian_to_jdn(1582, 10, 15), 2_299_161);
    }

    #[test]
    fn month_boundaries_are_consecutive() {
        assert_eq!(gregorian_to_jdn(2000, 3, 1) - gregorian_to_jdn(2000, 2, 29), 1);
        assert_eq!(gregorian_to_jdn(2023, 3, 1) - gregorian_to_jdn(2023, 2, 28), 1);
        assert_eq!(gregorian_to_jdn(2024, 1, 1) - gregorian_to_jdn(2023, 12, 31), 1);
    }

    #[test]
    fn year_lengths() {
        assert_eq!(gregorian_to_jdn(2001, 1, 1) - gregorian_to_jdn(2000, 1, 1), 366);
        assert_eq!(gregorian_to_jdn(1901, 1, 1) - gregorian_to_jdn(1900, 1, 1), 365);
        assert_eq!(gregorian_to_jdn(2024, 1, 1) - gregorian_to_jdn(2023, 1, 1), 365);
    }

    #[test]
    fn matches_chrono_day_count() {
        let a = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(date_to_jdn(b) - date_to_jdn(a), (b - a).num_days());
    }

    #[test]
    fn inverse_known_values() {
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
        assert_eq!(jdn_to_gregorian(2_451_604), (2000, 2, 29));
        assert_eq!(jdn_to_gregorian(UNIX_EPOCH_JDN), (1970, 1, 1));
    }

    #[test]
    fn inverse_is_exact_over_two_centuries() {
        let start = gregorian_to_jdn(1900, 1, 1);
        let end = gregorian_to_jdn(2100, 12, 31);
        for jdn in start..=end {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn, "round trip failed at {y}-{m}-{d}");
        }
    }
}
