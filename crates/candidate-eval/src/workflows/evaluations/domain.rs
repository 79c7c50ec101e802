use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::Recommendation;

/// Job family a candidate applied for; selects the weight vector and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum JobFamily {
    EngineeringProjects,
    QaqcMetrology,
    OperationsPlanning,
    SafetySecurity,
    DataAnalytics,
    ProcFinHrAdmin,
    SalesBd,
}

impl JobFamily {
    pub const ALL: [JobFamily; 7] = [
        JobFamily::EngineeringProjects,
        JobFamily::QaqcMetrology,
        JobFamily::OperationsPlanning,
        JobFamily::SafetySecurity,
        JobFamily::DataAnalytics,
        JobFamily::ProcFinHrAdmin,
        JobFamily::SalesBd,
    ];

    /// Family used whenever a tag is not recognised.
    pub const FALLBACK: JobFamily = JobFamily::EngineeringProjects;

    pub fn tag(self) -> &'static str {
        match self {
            JobFamily::EngineeringProjects => "engineering_projects",
            JobFamily::QaqcMetrology => "qaqc_metrology",
            JobFamily::OperationsPlanning => "operations_planning",
            JobFamily::SafetySecurity => "safety_security",
            JobFamily::DataAnalytics => "data_analytics",
            JobFamily::ProcFinHrAdmin => "proc_fin_hr_admin",
            JobFamily::SalesBd => "sales_bd",
        }
    }

    /// Strict lookup; `None` for anything outside the seven known tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|family| family.tag() == tag)
    }

    /// Lenient lookup used by scoring. Unknown tags score as engineering projects.
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!(
                family = tag,
                fallback = Self::FALLBACK.tag(),
                "unrecognised job family, using fallback weights and thresholds"
            );
            Self::FALLBACK
        })
    }
}

impl From<String> for JobFamily {
    fn from(value: String) -> Self {
        Self::resolve(&value)
    }
}

impl From<&str> for JobFamily {
    fn from(value: &str) -> Self {
        Self::resolve(value)
    }
}

impl fmt::Display for JobFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One interviewer's ratings for one round. Values are nominally 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub technical: i32,
    pub problem: i32,
    pub safety: i32,
    pub communication: i32,
    pub culture: i32,
}

impl ScoreSet {
    pub const MIN_RATING: i32 = 1;
    pub const MAX_RATING: i32 = 5;

    /// Every dimension set to the same rating.
    pub fn uniform(rating: i32) -> Self {
        Self {
            technical: rating,
            problem: rating,
            safety: rating,
            communication: rating,
            culture: rating,
        }
    }

    /// Copy with every dimension pulled into the rating scale.
    pub fn clamped(&self) -> Self {
        let clamp = |value: i32| value.clamp(Self::MIN_RATING, Self::MAX_RATING);
        Self {
            technical: clamp(self.technical),
            problem: clamp(self.problem),
            safety: clamp(self.safety),
            communication: clamp(self.communication),
            culture: clamp(self.culture),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterviewerId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// At most one evaluation exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvaluationKey {
    pub candidate_id: CandidateId,
    pub round_id: RoundId,
    pub interviewer_id: InterviewerId,
}

/// Interviewer ratings as submitted by the calling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSubmission {
    pub candidate_id: CandidateId,
    pub round_id: RoundId,
    pub interviewer_id: InterviewerId,
    pub scores: ScoreSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Stored evaluation; `eval_percent` is frozen at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub candidate_id: CandidateId,
    pub round_id: RoundId,
    pub interviewer_id: InterviewerId,
    pub scores: ScoreSet,
    pub eval_percent: u8,
    pub recommendation: Recommendation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn key(&self) -> EvaluationKey {
        EvaluationKey {
            candidate_id: self.candidate_id.clone(),
            round_id: self.round_id.clone(),
            interviewer_id: self.interviewer_id.clone(),
        }
    }
}
