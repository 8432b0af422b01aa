//! # agecalc
//!
//! Birth date arithmetic: calendar-correct age, tabular Hijri date, Western
//! and Chinese zodiac, next birthday, extrapolated life statistics and child
//! development stages.
//!
//! Every function is pure. The reference instant `now` is always an
//! explicit argument; nothing in this crate reads a clock.
//!
//! ## Quick Start
//!
//! ```
//! use agecalc::{CalculatorConfig, calculate_age, validate_birth_date};
//! use chrono::NaiveDate;
//!
//! let config = CalculatorConfig::default();
//! let now = NaiveDate::from_ymd_opt(2023, 3, 15)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let birth = validate_birth_date("2000-02-29", now, &config).unwrap();
//! let report = calculate_age(birth, now, &config);
//!
//! assert_eq!(report.age.years, 23);
//! assert_eq!(report.zodiac.western_sign, agecalc::WesternSign::Pisces);
//! assert_eq!(report.zodiac.chinese_animal, agecalc::ChineseAnimal::Dragon);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `validate` | Birth date parsing and bounds checks |
//! | `julian` | Gregorian date <-> Julian Day Number |
//! | `hijri` | Tabular Hijri calendar |
//! | `zodiac` | Western signs and Chinese animals |
//! | `age` | Years/months/days decomposition and raw totals |
//! | `birthday` | Next birthday projection |
//! | `life_stats` | Extrapolated life counters |
//! | `child_stage` | Developmental stage buckets |
//! | `locale` | Arabic and English display strings |
//! | `config` | Calculator configuration |
//! | `error` | Error types |

mod age;
mod birthday;
mod child_stage;
mod config;
mod error;
mod hijri;
mod julian;
mod life_stats;
mod locale;
mod report;
mod validate;
mod zodiac;

use chrono::NaiveDateTime;

pub use age::{AgeBreakdown, days_in_month, is_leap_year};
pub use birthday::NextBirthday;
pub use child_stage::{ChildStage, ChildStageKind};
pub use config::{CalculatorConfig, DEFAULT_MIN_BIRTH_YEAR, DEFAULT_STEPS_PER_DAY};
pub use error::ValidationError;
pub use hijri::{
    HIJRI_EPOCH_JDN, HijriDate, gregorian_to_hijri, hijri_month_length, hijri_to_jdn,
    is_hijri_leap_year, jdn_to_hijri,
};
pub use julian::{UNIX_EPOCH_JDN, date_to_jdn, gregorian_to_jdn, jdn_to_gregorian};
pub use life_stats::{ElapsedTotals, LifeCounter, LifeStats};
pub use locale::Locale;
pub use report::AgeReport;
pub use validate::{ValidatedDate, validate_birth_date, validate_birth_ymd};
pub use zodiac::{ChineseAnimal, Element, SignRange, WesternSign, ZodiacAssignment};

/// Computes the full report for a validated birth date.
///
/// Total for every [`ValidatedDate`]. `now` should be the instant the date
/// was validated against; a `now` earlier than the birth date yields
/// negative age fields.
#[tracing::instrument(level = "debug", skip(birth, config), fields(birth = %birth.date()))]
pub fn calculate_age(
    birth: ValidatedDate,
    now: NaiveDateTime,
    config: &CalculatorConfig,
) -> AgeReport {
    let report = AgeReport::build(birth.date(), now, config.steps_per_day(), config.locale());
    tracing::debug!(
        years = report.age.years,
        months = report.age.months,
        days = report.age.days,
        total_days = report.age.total_days,
        "age computed"
    );
    report
}

/// Extrapolates life counters for a whole number of elapsed days.
pub fn calculate_life_stats(total_days: u64, config: &CalculatorConfig) -> LifeStats {
    LifeStats::extrapolate(ElapsedTotals::from_days(total_days), config.steps_per_day())
}

/// Selects the developmental stage for an age in whole months, labelled in
/// the default locale.
pub fn classify_child_stage(total_months: u64) -> ChildStage {
    ChildStage::classify(total_months, Locale::default())
}
