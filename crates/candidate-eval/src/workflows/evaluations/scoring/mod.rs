mod aggregate;
mod percent;
mod policy;
mod rules;
mod tables;

pub use aggregate::{aggregate, AggregateResult, HistoricalEvaluation, AGGREGATE_RED_FLAG_REASON};
pub use percent::score_percent;
pub use policy::{decide, Decision, Recommendation};
pub use rules::{evaluate_red_flag, RedFlag, RedFlagRule, RED_FLAG_RULES};
pub use tables::{
    thresholds_for, weights_for, Dimension, ThresholdPair, WeightVector, THRESHOLD_TABLE,
    WEIGHT_TABLE,
};

use super::domain::{JobFamily, ScoreSet};
use serde::{Deserialize, Serialize};

/// Scored view of a single submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub percent: u8,
    pub red_flag: RedFlag,
    pub recommendation: Recommendation,
}

/// Red-flag rules and the percent scorer run independently, then feed the decider.
pub fn compute_evaluation(family: JobFamily, scores: &ScoreSet) -> EvaluationResult {
    let red_flag = evaluate_red_flag(family, scores);
    let percent = score_percent(family, scores);
    let decision = decide(family, percent, &red_flag);

    tracing::debug!(
        %family,
        percent,
        red_flag = red_flag.triggered,
        recommendation = %decision.recommendation,
        "scored evaluation"
    );

    EvaluationResult {
        percent,
        red_flag,
        recommendation: decision.recommendation,
    }
}

pub fn compute_aggregate(family: JobFamily, history: &[HistoricalEvaluation]) -> AggregateResult {
    aggregate(family, history)
}

/// Stateless evaluator; holds nothing beyond the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, family: JobFamily, scores: &ScoreSet) -> EvaluationResult {
        compute_evaluation(family, scores)
    }

    pub fn aggregate(&self, family: JobFamily, history: &[HistoricalEvaluation]) -> AggregateResult {
        compute_aggregate(family, history)
    }

    /// Entry point for raw tags, applying the unknown-family fallback.
    pub fn evaluate_tag(&self, family: &str, scores: &ScoreSet) -> EvaluationResult {
        compute_evaluation(JobFamily::resolve(family), scores)
    }

    pub fn aggregate_tag(&self, family: &str, history: &[HistoricalEvaluation]) -> AggregateResult {
        compute_aggregate(JobFamily::resolve(family), history)
    }
}
