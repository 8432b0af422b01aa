//! Western sun signs and Chinese zodiac animals.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::locale::{self, Locale};

/// One of the twelve Western zodiac signs, in ecliptic order from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Inclusive `(month, day)` bounds of a sign. Capricorn's range wraps the
/// year boundary, so its start month is greater than its end month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl SignRange {
    const fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start: (start_month, start_day),
            end: (end_month, end_day),
        }
    }

    /// Every range spans exactly two adjacent months, so a date belongs to
    /// it when it falls on or after the start day of the start month, or on
    /// or before the end day of the end month.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

const SIGN_RANGES: [(WesternSign, SignRange); 12] = [
    (WesternSign::Aries, SignRange::new(3, 21, 4, 19)),
    (WesternSign::Taurus, SignRange::new(4, 20, 5, 20)),
    (WesternSign::Gemini, SignRange::new(5, 21, 6, 20)),
    (WesternSign::Cancer, SignRange::new(6, 21, 7, 22)),
    (WesternSign::Leo, SignRange::new(7, 23, 8, 22)),
    (WesternSign::Virgo, SignRange::new(8, 23, 9, 22)),
    (WesternSign::Libra, SignRange::new(9, 23, 10, 22)),
    (WesternSign::Scorpio, SignRange::new(10, 23, 11, 21)),
    (WesternSign::Sagittarius, SignRange::new(11, 22, 12, 21)),
    (WesternSign::Capricorn, SignRange::new(12, 22, 1, 19)),
    (WesternSign::Aquarius, SignRange::new(1, 20, 2, 18)),
    (WesternSign::Pisces, SignRange::new(2, 19, 3, 20)),
];

impl WesternSign {
    pub const ALL: [WesternSign; 12] = [
        WesternSign::Aries,
        WesternSign::Taurus,
        WesternSign::Gemini,
        WesternSign::Cancer,
        WesternSign::Leo,
        WesternSign::Virgo,
        WesternSign::Libra,
        WesternSign::Scorpio,
        WesternSign::Sagittarius,
        WesternSign::Capricorn,
        WesternSign::Aquarius,
        WesternSign::Pisces,
    ];

    /// Resolves the sign for a `(month, day)` pair.
    ///
    /// Total over every real calendar day including February 29. A day past
    /// the end of its month resolves to the sign starting in that month.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        SIGN_RANGES
            .iter()
            .find(|(_, range)| range.contains(month, day))
            .map(|(sign, _)| *sign)
            .unwrap_or_else(|| {
                SIGN_RANGES
                    .iter()
                    .find(|(_, range)| range.start.0 == month)
                    .map_or(WesternSign::Capricorn, |(sign, _)| *sign)
            })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn range(self) -> SignRange {
        SIGN_RANGES[self.index()].1
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn name(self, locale: Locale) -> &'static str {
        locale::western_sign(self.index(), locale)
    }

    pub fn symbol(self) -> &'static str {
        locale::western_sign_symbol(self.index())
    }
}

impl Element {
    pub fn name(self, locale: Locale) -> &'static str {
        locale::element(self as usize, locale)
    }
}

/// One of the twelve animals of the Chinese zodiac.
///
/// Resolved from the Gregorian year alone. People born in January or early
/// February, before the lunar new year, get the animal of the following
/// cycle year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseAnimal {
    pub const ALL: [ChineseAnimal; 12] = [
        ChineseAnimal::Rat,
        ChineseAnimal::Ox,
        ChineseAnimal::Tiger,
        ChineseAnimal::Rabbit,
        ChineseAnimal::Dragon,
        ChineseAnimal::Snake,
        ChineseAnimal::Horse,
        ChineseAnimal::Goat,
        ChineseAnimal::Monkey,
        ChineseAnimal::Rooster,
        ChineseAnimal::Dog,
        ChineseAnimal::Pig,
    ];

    /// Year 4 CE (and so 1996, 2008, ...) is a Rat year.
    pub fn from_year(year: i32) -> Self {
        Self::ALL[(year - 4).rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self, locale: Locale) -> &'static str {
        locale::chinese_animal(self.index(), locale)
    }

    pub fn emoji(self) -> &'static str {
        locale::chinese_animal_emoji(self.index())
    }
}

/// Both zodiac assignments for a birth date, with localized labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacAssignment {
    pub western_sign: WesternSign,
    pub chinese_animal: ChineseAnimal,
    pub western_sign_name: &'static str,
    pub western_sign_symbol: &'static str,
    pub element: &'static str,
    pub chinese_animal_name: &'static str,
    pub chinese_animal_emoji: &'static str,
}

impl ZodiacAssignment {
    pub fn resolve(date: NaiveDate, locale: Locale) -> Self {
        let western_sign = WesternSign::from_month_day(date.month(), date.day());
        let chinese_animal = ChineseAnimal::from_year(date.year());
        Self {
            western_sign,
            chinese_animal,
            western_sign_name: western_sign.name(locale),
            western_sign_symbol: western_sign.symbol(),
            element: western_sign.element().name(locale),
            chinese_animal_name: chinese_animal.name(locale),
            chinese_animal_emoji: chinese_animal.emoji(),
        }
    }
}
