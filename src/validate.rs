//! Birth date validation.
//!
//! Validation is the single gate in front of every calculation: it parses
//! the input, rejects dates before the configured floor year, and rejects
//! dates after the reference instant.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::error::ValidationError;

/// A birth date that passed validation against a particular reference
/// instant and configuration.
///
/// Only [`validate_birth_date`] and [`validate_birth_ymd`] construct this
/// type, so holding one is proof that the date exists, is not in the future,
/// and is not older than the floor year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatedDate(NaiveDate);

impl ValidatedDate {
    /// Returns the underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

/// Parses and validates an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`ValidationError::InvalidDate`] if the input is not a real date.
/// - [`ValidationError::DateTooOld`] if the year precedes the floor.
/// - [`ValidationError::FutureBirthDate`] if the date is after `now`.
pub fn validate_birth_date(
    input: &str,
    now: NaiveDateTime,
    config: &CalculatorConfig,
) -> Result<ValidatedDate, ValidationError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        debug!(input = trimmed, error = %e, "birth date failed to parse");
        ValidationError::InvalidDate {
            input: input.to_string(),
        }
    })?;
    check_bounds(date, now, config)
}

/// Validates a birth date given as separate numeric fields.
///
/// # Errors
///
/// Same as [`validate_birth_date`]; a non-existent day such as February 30
/// is reported as [`ValidationError::InvalidDate`].
pub fn validate_birth_ymd(
    year: i32,
    month: u32,
    day: u32,
    now: NaiveDateTime,
    config: &CalculatorConfig,
) -> Result<ValidatedDate, ValidationError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        debug!(year, month, day, "birth date fields do not form a date");
        ValidationError::InvalidDate {
            input: format!("{year:04}-{month:02}-{day:02}"),
        }
    })?;
    check_bounds(date, now, config)
}

fn check_bounds(
    date: NaiveDate,
    now: NaiveDateTime,
    config: &CalculatorConfig,
) -> Result<ValidatedDate, ValidationError> {
    let min_year = config.min_birth_year();
    if date.year() < min_year {
        debug!(%date, min_year, "birth date before floor year");
        return Err(ValidationError::DateTooOld { date, min_year });
    }

    let today = now.date();
    if date > today {
        debug!(%date, %today, "birth date in the future");
        return Err(ValidationError::FutureBirthDate { date, today });
    }

    Ok(ValidatedDate(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn accepts_plain_date() {
        let v = validate_birth_date("1992-06-14", now(), &CalculatorConfig::default()).unwrap();
        assert_eq!(v.date(), NaiveDate::from_ymd_opt(1992, 6, 14).unwrap());
    }

    #[test]
    fn trims_whitespace() {
        assert!(validate_birth_date(" 1992-06-14\n", now(), &CalculatorConfig::default()).is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = validate_birth_date("yesterday", now(), &CalculatorConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                input: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn rejects_nonexistent_day() {
        let config = CalculatorConfig::default();
        assert!(matches!(
            validate_birth_date("2023-02-29", now(), &config),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            validate_birth_date("2023-04-31", now(), &config),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            validate_birth_ymd(2023, 13, 1, now(), &config),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn accepts_leap_day_in_leap_year() {
        assert!(validate_birth_ymd(2000, 2, 29, now(), &CalculatorConfig::default()).is_ok());
    }

    #[test]
    fn rejects_future_date() {
        let err = validate_birth_date("2024-05-11", now(), &CalculatorConfig::default()).unwrap_err();
        assert_eq!(err.code(), "future_birth_date");
    }

    #[test]
    fn accepts_today_regardless_of_time_of_day() {
        let midnight = NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let config = CalculatorConfig::default();
        assert!(validate_birth_date("2024-05-10", midnight, &config).is_ok());
        assert!(validate_birth_date("2024-05-10", now(), &config).is_ok());
    }

    #[test]
    fn floor_year_is_inclusive() {
        let config = CalculatorConfig::default();
        assert!(validate_birth_ymd(1900, 1, 1, now(), &config).is_ok());
        assert_eq!(
            validate_birth_ymd(1899, 12, 31, now(), &config).unwrap_err(),
            ValidationError::DateTooOld {
                date: NaiveDate::from_ymd_opt(1899, 12, 31).unwrap(),
                min_year: 1900,
            }
        );
    }

    #[test]
    fn floor_year_is_configurable() {
        let config = CalculatorConfig::default().with_min_birth_year(1950);
        assert!(matches!(
            validate_birth_date("1949-12-31", now(), &config),
            Err(ValidationError::DateTooOld { min_year: 1950, .. })
        ));
    }
}
