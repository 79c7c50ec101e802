use serde::{Deserialize, Serialize};

use super::super::domain::{JobFamily, ScoreSet};

/// Disqualifying-condition signal for one score set or an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedFlag {
    pub triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RedFlag {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn raised(reason: impl Into<String>) -> Self {
        Self {
            triggered: true,
            reason: Some(reason.into()),
        }
    }
}

/// One entry in the ordered red-flag list.
pub struct RedFlagRule {
    pub name: &'static str,
    pub applies: fn(JobFamily, &ScoreSet) -> bool,
    pub reason: &'static str,
}

const LOW_RATING: i32 = 2;

fn low_safety(_family: JobFamily, scores: &ScoreSet) -> bool {
    scores.safety <= LOW_RATING
}

fn qaqc_low_standards(family: JobFamily, scores: &ScoreSet) -> bool {
    family == JobFamily::QaqcMetrology && scores.technical <= LOW_RATING
}

fn hse_low_regulatory(family: JobFamily, scores: &ScoreSet) -> bool {
    family == JobFamily::SafetySecurity && scores.technical <= LOW_RATING
}

/// Evaluated top to bottom; the first rule that applies wins. Append new rules at the end.
pub const RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        name: "universal_safety",
        applies: low_safety,
        reason: "Safety/Integrity ≤ 2",
    },
    RedFlagRule {
        name: "qaqc_standards",
        applies: qaqc_low_standards,
        reason: "Standards/Compliance (technical) ≤ 2",
    },
    RedFlagRule {
        name: "hse_regulatory",
        applies: hse_low_regulatory,
        reason: "HSE/Regulatory knowledge (technical) ≤ 2",
    },
];

pub(crate) fn first_match<'a>(
    rules: &'a [RedFlagRule],
    family: JobFamily,
    scores: &ScoreSet,
) -> Option<&'a RedFlagRule> {
    let scores = scores.clamped();
    rules.iter().find(|rule| (rule.applies)(family, &scores))
}

pub fn evaluate_red_flag(family: JobFamily, scores: &ScoreSet) -> RedFlag {
    match first_match(RED_FLAG_RULES, family, scores) {
        Some(rule) => {
            tracing::debug!(rule = rule.name, %family, "red flag raised");
            RedFlag::raised(rule.reason)
        }
        None => RedFlag::clear(),
    }
}
