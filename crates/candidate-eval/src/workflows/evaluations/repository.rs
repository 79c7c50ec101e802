use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, EvaluationRecord, JobFamily, RoundId};
use super::scoring::HistoricalEvaluation;

/// Filters for listing evaluations; an empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationQuery {
    #[serde(default)]
    pub candidate_id: Option<CandidateId>,
    #[serde(default)]
    pub round_id: Option<RoundId>,
}

impl EvaluationQuery {
    pub fn for_candidate(candidate_id: CandidateId) -> Self {
        Self {
            candidate_id: Some(candidate_id),
            round_id: None,
        }
    }

    pub fn matches(&self, record: &EvaluationRecord) -> bool {
        self.candidate_id
            .as_ref()
            .map_or(true, |id| *id == record.candidate_id)
            && self
                .round_id
                .as_ref()
                .map_or(true, |id| *id == record.round_id)
    }
}

impl From<&EvaluationRecord> for HistoricalEvaluation {
    fn from(record: &EvaluationRecord) -> Self {
        Self {
            scores: record.scores,
            percent: record.eval_percent,
        }
    }
}

/// Storage abstraction for evaluation records.
///
/// `upsert` is keyed on (candidate, round, interviewer): a second submission for the same
/// key replaces the stored scores but keeps the original `created_at`.
pub trait EvaluationRepository: Send + Sync {
    fn upsert(&self, record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError>;
    /// Matching records, newest `created_at` first.
    fn list(&self, query: &EvaluationQuery) -> Result<Vec<EvaluationRecord>, RepositoryError>;

    fn for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        self.list(&EvaluationQuery::for_candidate(candidate_id.clone()))
    }
}

/// Source of the job family each candidate applied for.
pub trait CandidateDirectory: Send + Sync {
    fn applied_family(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<JobFamily>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
