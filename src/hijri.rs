//! Tabular Hijri calendar.
//!
//! This is the arithmetical (civil) Islamic calendar: a 30-year cycle in
//! which years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 have 355 days and
//! the rest 354. Odd months have 30 days, even months 29, and Dhu al-Hijjah
//! gains a 30th day in leap years.
//!
//! The result is an approximation. Official Hijri dates depend on moon
//! sighting and regularly differ from the tabular date by a day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::julian::{date_to_jdn, gregorian_to_jdn, jdn_to_gregorian};
use crate::locale::{self, Locale};

/// Julian Day Number of 1 Muharram 1 AH in the tabular calendar.
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

const DAYS_PER_CYCLE: i64 = 10_631;

/// A date in the tabular Hijri calendar, with display strings attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriDate {
    pub year: i32,
    /// 1..=12
    pub month: u8,
    /// 1..=30
    pub day: u8,
    pub month_name: &'static str,
    /// `"{day} {month_name} {year} {era}"`.
    pub formatted_label: String,
}

impl HijriDate {
    /// Computes the tabular Hijri date for a Julian Day Number.
    pub fn from_jdn(jdn: i64, locale: Locale) -> Self {
        let (year, month, day) = jdn_to_hijri(jdn);
        Self::from_parts(year, month, day, locale)
    }

    /// Computes the tabular Hijri date for a Gregorian date.
    pub fn from_gregorian(date: NaiveDate, locale: Locale) -> Self {
        Self::from_jdn(date_to_jdn(date), locale)
    }

    fn from_parts(year: i32, month: u8, day: u8, locale: Locale) -> Self {
        let month_name = locale::hijri_month(month, locale);
        let formatted_label = format!(
            "{day} {month_name} {year} {}",
            locale::hijri_era(locale)
        );
        Self {
            year,
            month,
            day,
            month_name,
            formatted_label,
        }
    }

    /// Julian Day Number of this date.
    pub fn to_jdn(&self) -> i64 {
        hijri_to_jdn(self.year, self.month, self.day)
    }

    /// The Gregorian date this Hijri date falls on.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let (y, m, d) = jdn_to_gregorian(self.to_jdn());
        NaiveDate::from_ymd_opt(y, m, d)
    }
}

/// Converts a Julian Day Number to a tabular Hijri `(year, month, day)`.
///
/// Valid for every Julian Day Number from the Hijri epoch onward.
pub fn jdn_to_hijri(jdn: i64) -> (i32, u8, u8) {
    let l = jdn - HIJRI_EPOCH_JDN + 10_632;
    let n = (l - 1) / DAYS_PER_CYCLE;
    let l = l - DAYS_PER_CYCLE * n + 354;
    let j = ((10_985 - l) / 5316) * ((50 * l) / 17_719) + (l / 5670) * ((43 * l) / 15_238);
    let l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = 30 * n + j - 30;
    (year as i32, month as u8, day as u8)
}

/// Converts a tabular Hijri date to its Julian Day Number.
///
/// Exact inverse of [`jdn_to_hijri`].
pub fn hijri_to_jdn(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    // ceil(29.5 * (month - 1))
    let month_offset = (59 * (month - 1) + 1) / 2;
    i64::from(day) + month_offset + (year - 1) * 354 + (3 + 11 * year) / 30 + HIJRI_EPOCH_JDN - 1
}

/// Whether a Hijri year has 355 days.
pub fn is_hijri_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

/// Number of days in a Hijri month (29 or 30).
pub fn hijri_month_length(year: i32, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_hijri_leap_year(year)) {
        30
    } else {
        29
    }
}

/// Tabular Hijri date for a Gregorian `(year, month, day)`.
pub fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> (i32, u8, u8) {
    jdn_to_hijri(gregorian_to_jdn(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(jdn_to_hijri(HIJRI_EPOCH_JDN), (1, 1, 1));
        assert_eq!(hijri_to_jdn(1, 1, 1), HIJRI_EPOCH_JDN);
    }

    #[test]
    fn known_conversions() {
        assert_eq!(gregorian_to_hijri(2000, 1, 1), (1420, 9, 24));
        assert_eq!(gregorian_to_hijri(2000, 2, 29), (1420, 11, 24));
        assert_eq!(gregorian_to_hijri(1900, 1, 1), (1317, 8, 28));
        assert_eq!(gregorian_to_hijri(2023, 3, 23), (1444, 9, 1));
    }

    #[test]
    fn ranges_hold_over_two_centuries() {
        let start = gregorian_to_jdn(1900, 1, 1);
        let end = gregorian_to_jdn(2100, 12, 31);
        for jdn in start..=end {
            let (y, m, d) = jdn_to_hijri(jdn);
            assert!((1..=12).contains(&m), "month {m} out of range at jdn {jdn}");
            assert!(
                d >= 1 && d <= hijri_month_length(y, m),
                "day {d} out of range for {y}-{m} at jdn {jdn}"
            );
            assert_eq!(hijri_to_jdn(y, m, d), jdn, "inverse failed at jdn {jdn}");
        }
    }

    #[test]
    fn leap_years_in_cycle() {
        let leaps: Vec<i32> = (1441..=1470).filter(|&y| is_hijri_leap_year(y)).collect();
        assert_eq!(
            leaps,
            vec![1442, 1445, 1447, 1450, 1453, 1456, 1458, 1461, 1464, 1466, 1469]
        );
    }

    #[test]
    fn year_length_matches_leap_rule() {
        for year in 1300..1500 {
            let len = hijri_to_jdn(year + 1, 1, 1) - hijri_to_jdn(year, 1, 1);
            let expected = if is_hijri_leap_year(year) { 355 } else { 354 };
            assert_eq!(len, expected, "year {year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(hijri_month_length(1444, 1), 30);
        assert_eq!(hijri_month_length(1444, 2), 29);
        assert_eq!(hijri_month_length(1444, 12), 29);
        assert_eq!(hijri_month_length(1445, 12), 30);
    }

    #[test]
    fn hijri_date_labels() {
        let date = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let en = HijriDate::from_gregorian(date, Locale::English);
        assert_eq!(en.month_name, "Dhu al-Qi'dah");
        assert_eq!(en.formatted_label, "24 Dhu al-Qi'dah 1420 AH");

        let ar = HijriDate::from_gregorian(date, Locale::Arabic);
        assert_eq!(ar.month_name, "ذو القعدة");
        assert_eq!(ar.formatted_label, "24 ذو القعدة 1420 هـ");
    }

    #[test]
    fn hijri_date_to_gregorian() {
        let date = NaiveDate::from_ymd_opt(1992, 6, 14).unwrap();
        let hijri = HijriDate::from_gregorian(date, Locale::English);
        assert_eq!((hijri.year, hijri.month, hijri.day), (1412, 12, 13));
        assert_eq!(hijri.to_gregorian(), Some(date));
    }
}
