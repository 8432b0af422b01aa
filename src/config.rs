//! Calculator configuration.

use serde::Deserialize;

use crate::locale::Locale;

/// Default earliest accepted birth year.
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;

/// Default walking rate used by the `steps_walked` life counter.
///
/// Some deployments use 7500 instead; set it through
/// [`CalculatorConfig::with_steps_per_day`].
pub const DEFAULT_STEPS_PER_DAY: u64 = 5000;

/// Tunable parameters shared by validation and the statistics extrapolator.
///
/// # Example
///
/// ```
/// use agecalc::{CalculatorConfig, Locale};
///
/// let config = CalculatorConfig::default()
///     .with_steps_per_day(7500)
///     .with_locale(Locale::English);
///
/// assert_eq!(config.steps_per_day(), 7500);
/// assert_eq!(config.min_birth_year(), 1900);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalculatorConfig {
    /// Birth dates before January 1 of this year are rejected.
    min_birth_year: i32,
    /// Steps per day for the `steps_walked` counter.
    steps_per_day: u64,
    /// Language of display strings in reports.
    locale: Locale,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_birth_year: DEFAULT_MIN_BIRTH_YEAR,
            steps_per_day: DEFAULT_STEPS_PER_DAY,
            locale: Locale::default(),
        }
    }
}

impl CalculatorConfig {
    /// Sets the earliest accepted birth year.
    pub fn with_min_birth_year(mut self, year: i32) -> Self {
        self.min_birth_year = year;
        self
    }

    /// Sets the walking rate for the `steps_walked` counter.
    pub fn with_steps_per_day(mut self, steps: u64) -> Self {
        self.steps_per_day = steps;
        self
    }

    /// Sets the display language.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn min_birth_year(&self) -> i32 {
        self.min_birth_year
    }

    pub fn steps_per_day(&self) -> u64 {
        self.steps_per_day
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
