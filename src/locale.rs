//! Display strings for every enumerated value the calculator produces.
//!
//! Tables are indexed by the enum discriminant of the value they describe,
//! never by another display string. Each table has one row per [`Locale`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output language for display strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    fn row(self) -> usize {
        match self {
            Locale::Arabic => 0,
            Locale::English => 1,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Arabic => f.write_str("ar"),
            Locale::English => f.write_str("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Locale::Arabic),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unknown locale: {other} (expected ar or en)")),
        }
    }
}

const WESTERN_SIGNS: [[&str; 12]; 2] = [
    [
        "الحمل", "الثور", "الجوزاء", "السرطان", "الأسد", "العذراء", "الميزان", "العقرب",
        "القوس", "الجدي", "الدلو", "الحوت",
    ],
    [
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
        "Capricorn",
        "Aquarius",
        "Pisces",
    ],
];

const WESTERN_SIGN_SYMBOLS: [&str; 12] = [
    "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓",
];

const CHINESE_ANIMALS: [[&str; 12]; 2] = [
    [
        "الفأر", "الثور", "النمر", "الأرنب", "التنين", "الأفعى", "الحصان", "الماعز", "القرد",
        "الديك", "الكلب", "الخنزير",
    ],
    [
        "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
        "Dog", "Pig",
    ],
];

const CHINESE_ANIMAL_EMOJI: [&str; 12] = [
    "🐀", "🐂", "🐅", "🐇", "🐉", "🐍", "🐎", "🐐", "🐒", "🐓", "🐕", "🐖",
];

const ELEMENTS: [[&str; 4]; 2] = [
    ["نار", "تراب", "هواء", "ماء"],
    ["Fire", "Earth", "Air", "Water"],
];

const HIJRI_MONTHS: [[&str; 12]; 2] = [
    [
        "محرم",
        "صفر",
        "ربيع الأول",
        "ربيع الآخر",
        "جمادى الأولى",
        "جمادى الآخرة",
        "رجب",
        "شعبان",
        "رمضان",
        "شوال",
        "ذو القعدة",
        "ذو الحجة",
    ],
    [
        "Muharram",
        "Safar",
        "Rabi' al-Awwal",
        "Rabi' al-Thani",
        "Jumada al-Awwal",
        "Jumada al-Thani",
        "Rajab",
        "Sha'ban",
        "Ramadan",
        "Shawwal",
        "Dhu al-Qi'dah",
        "Dhu al-Hijjah",
    ],
];

const HIJRI_ERA: [&str; 2] = ["هـ", "AH"];

// Monday first, matching `chrono::Weekday::num_days_from_monday`.
const WEEKDAYS: [[&str; 7]; 2] = [
    [
        "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
    ],
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
];

const LIFE_COUNTERS: [[&str; 10]; 2] = [
    [
        "نبضات القلب",
        "الأنفاس",
        "أيام النوم",
        "الوجبات",
        "رمشات العين",
        "الخطوات",
        "لترات الماء",
        "كيلوغرامات الطعام",
        "الأحلام",
        "الضحكات",
    ],
    [
        "Heartbeats",
        "Breaths",
        "Days asleep",
        "Meals",
        "Blinks",
        "Steps walked",
        "Liters of water",
        "Kilograms of food",
        "Dreams",
        "Laughs",
    ],
];

const CHILD_STAGES: [[&str; 7]; 2] = [
    [
        "حديث الولادة",
        "رضيع",
        "رضيع كبير",
        "طفل صغير",
        "ما قبل المدرسة",
        "سن المدرسة",
        "مراهقة مبكرة",
    ],
    [
        "Newborn",
        "Infant",
        "Older infant",
        "Toddler",
        "Preschooler",
        "School-age child",
        "Early adolescent",
    ],
];

pub(crate) fn western_sign(index: usize, locale: Locale) -> &'static str {
    WESTERN_SIGNS[locale.row()][index]
}

pub(crate) fn western_sign_symbol(index: usize) -> &'static str {
    WESTERN_SIGN_SYMBOLS[index]
}

pub(crate) fn chinese_animal(index: usize, locale: Locale) -> &'static str {
    CHINESE_ANIMALS[locale.row()][index]
}

pub(crate) fn chinese_animal_emoji(index: usize) -> &'static str {
    CHINESE_ANIMAL_EMOJI[index]
}

pub(crate) fn element(index: usize, locale: Locale) -> &'static str {
    ELEMENTS[locale.row()][index]
}

/// `month` is 1-based.
pub(crate) fn hijri_month(month: u8, locale: Locale) -> &'static str {
    HIJRI_MONTHS[locale.row()][usize::from(month - 1)]
}

pub(crate) fn hijri_era(locale: Locale) -> &'static str {
    HIJRI_ERA[locale.row()]
}

pub(crate) fn weekday(index: usize, locale: Locale) -> &'static str {
    WEEKDAYS[locale.row()][index]
}

pub(crate) fn life_counter(index: usize, locale: Locale) -> &'static str {
    LIFE_COUNTERS[locale.row()][index]
}

pub(crate) fn child_stage(index: usize, locale: Locale) -> &'static str {
    CHILD_STAGES[locale.row()][index]
}
