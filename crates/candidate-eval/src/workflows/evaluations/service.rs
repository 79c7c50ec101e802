use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::domain::{CandidateId, EvaluationRecord, EvaluationSubmission, JobFamily};
use super::repository::{CandidateDirectory, EvaluationQuery, EvaluationRepository, RepositoryError};
use super::scoring::{AggregateResult, HistoricalEvaluation, RedFlag, ScoringEngine};

/// Service composing the candidate directory, evaluation store, and scoring engine.
pub struct EvaluationService<R, C> {
    repository: Arc<R>,
    candidates: Arc<C>,
    engine: ScoringEngine,
}

/// Stored evaluation plus the red-flag outcome computed for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    pub evaluation: EvaluationRecord,
    pub red_flag: RedFlag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateAggregate {
    pub candidate_id: CandidateId,
    pub family: JobFamily,
    #[serde(flatten)]
    pub aggregate: AggregateResult,
}

impl<R, C> EvaluationService<R, C>
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    pub fn new(repository: Arc<R>, candidates: Arc<C>) -> Self {
        Self {
            repository,
            candidates,
            engine: ScoringEngine::new(),
        }
    }

    /// Score a submission and upsert it under its (candidate, round, interviewer) key.
    pub fn submit(
        &self,
        submission: EvaluationSubmission,
    ) -> Result<SubmissionReceipt, EvaluationServiceError> {
        validate(&submission)?;
        let family = self.family_of(&submission.candidate_id)?;

        let result = self.engine.evaluate(family, &submission.scores);
        let now = Utc::now();
        let record = EvaluationRecord {
            candidate_id: submission.candidate_id,
            round_id: submission.round_id,
            interviewer_id: submission.interviewer_id,
            scores: submission.scores,
            eval_percent: result.percent,
            recommendation: result.recommendation,
            notes: submission.notes,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.upsert(record)?;
        tracing::info!(
            candidate = %stored.candidate_id,
            round = %stored.round_id,
            %family,
            percent = stored.eval_percent,
            recommendation = %stored.recommendation,
            "evaluation recorded"
        );

        Ok(SubmissionReceipt {
            evaluation: stored,
            red_flag: result.red_flag,
        })
    }

    pub fn list(
        &self,
        query: &EvaluationQuery,
    ) -> Result<Vec<EvaluationRecord>, EvaluationServiceError> {
        Ok(self.repository.list(query)?)
    }

    /// Combine every evaluation the candidate has received across all rounds.
    pub fn aggregate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<CandidateAggregate, EvaluationServiceError> {
        let family = self.family_of(candidate_id)?;
        let records = self.repository.for_candidate(candidate_id)?;
        let history: Vec<HistoricalEvaluation> =
            records.iter().map(HistoricalEvaluation::from).collect();

        Ok(CandidateAggregate {
            candidate_id: candidate_id.clone(),
            family,
            aggregate: self.engine.aggregate(family, &history),
        })
    }

    fn family_of(&self, candidate_id: &CandidateId) -> Result<JobFamily, EvaluationServiceError> {
        self.candidates
            .applied_family(candidate_id)?
            .ok_or_else(|| EvaluationServiceError::CandidateNotFound(candidate_id.clone()))
    }
}

fn validate(submission: &EvaluationSubmission) -> Result<(), EvaluationServiceError> {
    let required = [
        ("candidate_id", &submission.candidate_id.0),
        ("round_id", &submission.round_id.0),
        ("interviewer_id", &submission.interviewer_id.0),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(EvaluationServiceError::MissingField(field));
        }
    }

    Ok(())
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
