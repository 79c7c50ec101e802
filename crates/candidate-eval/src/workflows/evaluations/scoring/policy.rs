use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::JobFamily;
use super::rules::RedFlag;
use super::tables::thresholds_for;

/// Hiring outcome for one evaluation or a candidate aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Hire,
    Hold,
    NoHire,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Hire => "hire",
            Recommendation::Hold => "hold",
            Recommendation::NoHire => "no_hire",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub recommendation: Recommendation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Decision {
    pub fn summary(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{} ({reason})", self.recommendation),
            None => self.recommendation.to_string(),
        }
    }
}

/// A raised red flag always yields `NoHire`; otherwise cutoffs are inclusive.
pub fn decide(family: JobFamily, percent: u8, red_flag: &RedFlag) -> Decision {
    if red_flag.triggered {
        return Decision {
            recommendation: Recommendation::NoHire,
            reason: red_flag.reason.clone(),
        };
    }

    let thresholds = thresholds_for(family);
    let recommendation = if percent >= thresholds.hire {
        Recommendation::Hire
    } else if percent >= thresholds.consider_min {
        Recommendation::Hold
    } else {
        Recommendation::NoHire
    };

    Decision {
        recommendation,
        reason: None,
    }
}
