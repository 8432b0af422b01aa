//! Life statistics extrapolated from elapsed time.
//!
//! Every counter is a fixed rate times one elapsed total, floored. Rates are
//! whole or simple fractions, so all arithmetic stays in integers.

use serde::Serialize;

use crate::age::AgeBreakdown;
use crate::locale::{self, Locale};

const HEARTBEATS_PER_MINUTE: u64 = 72;
const BREATHS_PER_MINUTE: u64 = 16;
const MEALS_PER_DAY: u64 = 3;
const BLINKS_PER_HOUR: u64 = 900;
const WATER_LITERS_PER_DAY: u64 = 2;
const DREAMS_PER_DAY: u64 = 4;
const LAUGHS_PER_DAY: u64 = 15;

/// Named life counter, usable as a stable key into [`LifeStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LifeCounter {
    Heartbeats,
    Breaths,
    SleepDays,
    Meals,
    Blinks,
    StepsWalked,
    WaterLiters,
    FoodKg,
    Dreams,
    Laughs,
}

impl LifeCounter {
    pub const ALL: [LifeCounter; 10] = [
        LifeCounter::Heartbeats,
        LifeCounter::Breaths,
        LifeCounter::SleepDays,
        LifeCounter::Meals,
        LifeCounter::Blinks,
        LifeCounter::StepsWalked,
        LifeCounter::WaterLiters,
        LifeCounter::FoodKg,
        LifeCounter::Dreams,
        LifeCounter::Laughs,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        locale::life_counter(self as usize, locale)
    }
}

/// Elapsed totals the counters are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTotals {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl ElapsedTotals {
    /// Totals for a whole number of days.
    pub fn from_days(days: u64) -> Self {
        Self {
            days,
            hours: days.saturating_mul(24),
            minutes: days.saturating_mul(1440),
        }
    }

    /// Totals taken from an age breakdown. Negative totals clamp to zero.
    pub fn from_age(age: &AgeBreakdown) -> Self {
        let clamp = |v: i64| u64::try_from(v).unwrap_or(0);
        Self {
            days: clamp(age.total_days),
            hours: clamp(age.total_hours),
            minutes: clamp(age.total_minutes),
        }
    }
}

/// Extrapolated life counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeStats {
    pub heartbeats: u64,
    pub breaths: u64,
    pub sleep_days: u64,
    pub meals: u64,
    pub blinks: u64,
    pub steps_walked: u64,
    pub water_liters: u64,
    pub food_kg: u64,
    pub dreams: u64,
    pub laughs: u64,
}

impl LifeStats {
    /// Computes every counter from elapsed totals.
    pub fn extrapolate(totals: ElapsedTotals, steps_per_day: u64) -> Self {
        let ElapsedTotals {
            days,
            hours,
            minutes,
        } = totals;
        Self {
            heartbeats: minutes.saturating_mul(HEARTBEATS_PER_MINUTE),
            breaths: minutes.saturating_mul(BREATHS_PER_MINUTE),
            sleep_days: days / 3,
            meals: days.saturating_mul(MEALS_PER_DAY),
            blinks: hours.saturating_mul(BLINKS_PER_HOUR),
            steps_walked: days.saturating_mul(steps_per_day),
            water_liters: days.saturating_mul(WATER_LITERS_PER_DAY),
            // 1.5 kg per day
            food_kg: days.saturating_mul(3) / 2,
            dreams: days.saturating_mul(DREAMS_PER_DAY),
            laughs: days.saturating_mul(LAUGHS_PER_DAY),
        }
    }

    /// Value of one counter.
    pub fn get(&self, counter: LifeCounter) -> u64 {
        match counter {
            LifeCounter::Heartbeats => self.heartbeats,
            LifeCounter::Breaths => self.breaths,
            LifeCounter::SleepDays => self.sleep_days,
            LifeCounter::Meals => self.meals,
            LifeCounter::Blinks => self.blinks,
            LifeCounter::StepsWalked => self.steps_walked,
            LifeCounter::WaterLiters => self.water_liters,
            LifeCounter::FoodKg => self.food_kg,
            LifeCounter::Dreams => self.dreams,
            LifeCounter::Laughs => self.laughs,
        }
    }

    /// All counters in table order.
    pub fn iter(&self) -> impl Iterator<Item = (LifeCounter, u64)> + '_ {
        LifeCounter::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
