//! Developmental stage of a child by age in whole months.

use serde::Serialize;

use crate::locale::{self, Locale};

/// Ordered developmental buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildStageKind {
    /// 0 months
    Newborn,
    /// 1 to 5 months
    Infant,
    /// 6 to 11 months
    OlderInfant,
    /// 1 to 2 years
    Toddler,
    /// 3 to 5 years
    Preschool,
    /// 6 to 11 years
    SchoolAge,
    /// 12 years and up
    EarlyAdolescent,
}

/// Static description of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStage {
    pub kind: ChildStageKind,
    pub name: &'static str,
    /// Inclusive lower bound in months.
    pub min_months: u64,
    /// Exclusive upper bound in months, `None` for the last stage.
    pub max_months: Option<u64>,
    pub description: &'static str,
    pub milestones: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub average_height: &'static str,
    pub average_weight: &'static str,
    pub sleep_hours: &'static str,
}

struct StageInfo {
    kind: ChildStageKind,
    min_months: u64,
    description: &'static str,
    milestones: &'static [&'static str],
    tips: &'static [&'static str],
    average_height: &'static str,
    average_weight: &'static str,
    sleep_hours: &'static str,
}

const STAGES: [StageInfo; 7] = [
    StageInfo {
        kind: ChildStageKind::Newborn,
        min_months: 0,
        description: "The first weeks of life, spent adapting to the world outside the womb.",
        milestones: &[
            "Turns toward familiar voices",
            "Focuses on faces 20 to 30 cm away",
            "Strong rooting and grasp reflexes",
        ],
        tips: &[
            "Feed on demand, usually every 2 to 3 hours",
            "Always place the baby on their back to sleep",
            "Plenty of skin-to-skin contact",
        ],
        average_height: "48-55 cm",
        average_weight: "2.5-4.5 kg",
        sleep_hours: "16-18",
    },
    StageInfo {
        kind: ChildStageKind::Infant,
        min_months: 1,
        description: "Rapid growth and the first social responses.",
        milestones: &[
            "Social smile",
            "Holds head steady",
            "Coos and babbles",
            "Rolls from tummy to back",
        ],
        tips: &[
            "Daily supervised tummy time",
            "Talk and sing to the baby often",
            "Keep up with the vaccination schedule",
        ],
        average_height: "54-68 cm",
        average_weight: "4-8 kg",
        sleep_hours: "14-17",
    },
    StageInfo {
        kind: ChildStageKind::OlderInfant,
        min_months: 6,
        description: "Starting solid foods and learning to move around.",
        milestones: &[
            "Sits without support",
            "Crawls",
            "Responds to own name",
            "Pulls to stand",
        ],
        tips: &[
            "Introduce solid foods one at a time",
            "Baby-proof the home",
            "Read picture books together",
        ],
        average_height: "64-76 cm",
        average_weight: "7-10 kg",
        sleep_hours: "12-16",
    },
    StageInfo {
        kind: ChildStageKind::Toddler,
        min_months: 12,
        description: "Walking, first words and a growing sense of independence.",
        milestones: &[
            "Walks independently",
            "Says several words, then short phrases",
            "Stacks blocks",
            "Follows simple instructions",
        ],
        tips: &[
            "Offer simple choices to build independence",
            "Keep a consistent daily routine",
            "Limit screen time",
        ],
        average_height: "75-95 cm",
        average_weight: "9-14 kg",
        sleep_hours: "11-14",
    },
    StageInfo {
        kind: ChildStageKind::Preschool,
        min_months: 36,
        description: "Imagination, play with others and rapid language growth.",
        milestones: &[
            "Speaks in full sentences",
            "Draws simple shapes",
            "Plays cooperatively",
            "Hops and climbs with confidence",
        ],
        tips: &[
            "Encourage pretend play",
            "Answer questions patiently",
            "Practice letters and numbers through games",
        ],
        average_height: "94-116 cm",
        average_weight: "13-20 kg",
        sleep_hours: "10-13",
    },
    StageInfo {
        kind: ChildStageKind::SchoolAge,
        min_months: 72,
        description: "Formal learning, friendships and steady growth.",
        milestones: &[
            "Reads and writes",
            "Builds lasting friendships",
            "Develops coordination for sports",
        ],
        tips: &[
            "Support a regular homework routine",
            "At least one hour of physical activity daily",
            "Talk openly about school and friends",
        ],
        average_height: "115-150 cm",
        average_weight: "20-40 kg",
        sleep_hours: "9-12",
    },
    StageInfo {
        kind: ChildStageKind::EarlyAdolescent,
        min_months: 144,
        description: "The onset of puberty and a search for identity.",
        milestones: &[
            "Growth spurt",
            "Abstract reasoning",
            "Stronger need for privacy and independence",
        ],
        tips: &[
            "Listen without judging",
            "Set clear and fair boundaries",
            "Protect sleep from late-night screens",
        ],
        average_height: "140-175 cm",
        average_weight: "35-65 kg",
        sleep_hours: "8-10",
    },
];

impl ChildStage {
    /// Selects the stage containing `total_months`.
    pub fn classify(total_months: u64, locale: Locale) -> Self {
        let index = STAGES
            .iter()
            .rposition(|s| total_months >= s.min_months)
            .unwrap_or(0);
        Self::from_index(index, locale)
    }

    /// Every stage in order.
    pub fn all(locale: Locale) -> impl Iterator<Item = ChildStage> {
        (0..STAGES.len()).map(move |i| Self::from_index(i, locale))
    }

    fn from_index(index: usize, locale: Locale) -> Self {
        let info = &STAGES[index];
        Self {
            kind: info.kind,
            name: locale::child_stage(index, locale),
            min_months: info.min_months,
            max_months: STAGES.get(index + 1).map(|next| next.min_months),
            description: info.description,
            milestones: info.milestones,
            tips: info.tips,
            average_height: info.average_height,
            average_weight: info.average_weight,
            sleep_hours: info.sleep_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(months: u64) -> ChildStageKind {
        ChildStage::classify(months, Locale::English).kind
    }

    #[test]
    fn boundaries() {
        assert_eq!(kind(0), ChildStageKind::Newborn);
        assert_eq!(kind(1), ChildStageKind::Infant);
        assert_eq!(kind(5), ChildStageKind::Infant);
        assert_eq!(kind(6), ChildStageKind::OlderInfant);
        assert_eq!(kind(11), ChildStageKind::OlderInfant);
        assert_eq!(kind(12), ChildStageKind::Toddler);
        assert_eq!(kind(35), ChildStageKind::Toddler);
        assert_eq!(kind(36), ChildStageKind::Preschool);
        assert_eq!(kind(71), ChildStageKind::Preschool);
        assert_eq!(kind(72), ChildStageKind::SchoolAge);
        assert_eq!(kind(143), ChildStageKind::SchoolAge);
        assert_eq!(kind(144), ChildStageKind::EarlyAdolescent);
        assert_eq!(kind(u64::MAX), ChildStageKind::EarlyAdolescent);
    }

    #[test]
    fn ranges_are_contiguous() {
        let stages: Vec<ChildStage> = ChildStage::all(Locale::English).collect();
        assert_eq!(stages.len(), 7);
        assert_eq!(stages[0].min_months, 0);
        for pair in stages.windows(2) {
            assert_eq!(pair[0].max_months, Some(pair[1].min_months));
            assert!(pair[0].kind < pair[1].kind);
        }
        assert_eq!(stages[6].max_months, None);
    }

    #[test]
    fn metadata_is_populated() {
        for stage in ChildStage::all(Locale::Arabic) {
            assert!(!stage.name.is_empty());
            assert!(!stage.description.is_empty());
            assert!(!stage.milestones.is_empty());
            assert!(!stage.tips.is_empty());
            assert!(!stage.average_height.is_empty());
            assert!(!stage.average_weight.is_empty());
            assert!(!stage.sleep_hours.is_empty());
        }
    }

    #[test]
    fn localized_name() {
        assert_eq!(ChildStage::classify(20, Locale::English).name, "Toddler");
        assert_eq!(ChildStage::classify(20, Locale::Arabic).name, "طفل صغير");
    }
}
