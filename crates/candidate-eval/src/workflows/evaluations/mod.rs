//! Candidate evaluation scoring, intake, and multi-round aggregation.
//!
//! `scoring` is pure and stateless: family weight/threshold tables, the ordered red-flag
//! rules, the percent scorer, and the recommendation decider. The service and router layer
//! it over a repository seam so callers can persist evaluations however they like.

pub mod domain;
pub mod history;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CandidateId, EvaluationKey, EvaluationRecord, EvaluationSubmission, InterviewerId, JobFamily,
    RoundId, ScoreSet,
};
pub use history::{import_history, import_history_from_path, ImportError};
pub use repository::{CandidateDirectory, EvaluationQuery, EvaluationRepository, RepositoryError};
pub use router::{evaluation_router, scoring_router};
pub use scoring::{
    compute_aggregate, compute_evaluation, AggregateResult, EvaluationResult,
    HistoricalEvaluation, Recommendation, RedFlag, ScoringEngine,
};
pub use service::{
    CandidateAggregate, EvaluationService, EvaluationServiceError, SubmissionReceipt,
};
