//! Full age report for a validated birth date.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

use crate::age::AgeBreakdown;
use crate::birthday::NextBirthday;
use crate::hijri::HijriDate;
use crate::life_stats::{ElapsedTotals, LifeStats};
use crate::locale::{self, Locale};
use crate::zodiac::ZodiacAssignment;

/// Everything the calculator derives from one birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub birth_weekday: Weekday,
    pub birth_weekday_name: &'static str,
    pub age: AgeBreakdown,
    /// The age as "X years, Y months, Z days".
    pub summary: String,
    pub hijri: HijriDate,
    pub zodiac: ZodiacAssignment,
    pub next_birthday: NextBirthday,
    pub life_stats: LifeStats,
}

impl AgeReport {
    pub(crate) fn build(
        birth: NaiveDate,
        now: NaiveDateTime,
        steps_per_day: u64,
        locale: Locale,
    ) -> Self {
        let age = AgeBreakdown::between(birth, now);
        let weekday = birth.weekday();
        Self {
            birth_date: birth,
            birth_weekday: weekday,
            birth_weekday_name: locale::weekday(weekday.num_days_from_monday() as usize, locale),
            summary: age.to_string(),
            hijri: HijriDate::from_gregorian(birth, locale),
            zodiac: ZodiacAssignment::resolve(birth, locale),
            next_birthday: NextBirthday::project(birth, now),
            life_stats: LifeStats::extrapolate(ElapsedTotals::from_age(&age), steps_per_day),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn weekday_and_labels() {
        let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let now = NaiveDate::from_ymd_opt(2023, 3, 15)
            .unwrap()
            .and_time(NaiveTime::MIN);
        let report = AgeReport::build(birth, now, 5000, Locale::English);
        assert_eq!(report.birth_weekday, Weekday::Tue);
        assert_eq!(report.birth_weekday_name, "Tuesday");
        assert_eq!(report.summary, "23 years, 0 months, 14 days");

        let report = AgeReport::build(birth, now, 5000, Locale::Arabic);
        assert_eq!(report.birth_weekday_name, "الثلاثاء");
    }

    #[test]
    fn life_stats_follow_age_totals() {
        let birth = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2020, 1, 11)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let report = AgeReport::build(birth, now, 7500, Locale::English);
        assert_eq!(report.age.total_days, 10);
        assert_eq!(report.life_stats.steps_walked, 75_000);
        assert_eq!(report.life_stats.blinks, 246 * 900);
    }
}
