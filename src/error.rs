//! Error types for the agecalc crate.

use chrono::NaiveDate;

/// Reasons a birth date is rejected before any calculation runs.
///
/// Validation is the only fallible step: every calculation downstream of a
/// [`ValidatedDate`](crate::ValidatedDate) is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum ValidationError {
    /// The input could not be read as a calendar date.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
    },

    /// The birth date lies after the reference day.
    #[error("birth date {date} is in the future (today is {today})")]
    FutureBirthDate {
        /// The rejected birth date.
        date: NaiveDate,
        /// Calendar date of the reference instant.
        today: NaiveDate,
    },

    /// The birth year precedes the configured floor.
    #[error("birth date {date} is before the minimum year {min_year}")]
    DateTooOld {
        /// The rejected birth date.
        date: NaiveDate,
        /// The configured floor year.
        min_year: i32,
    },
}

impl ValidationError {
    /// Stable machine identifier for this error, for callers that map
    /// errors to localized messages.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate { .. } => "invalid_date",
            ValidationError::FutureBirthDate { .. } => "future_birth_date",
            ValidationError::DateTooOld { .. } => "date_too_old",
        }
    }
}
