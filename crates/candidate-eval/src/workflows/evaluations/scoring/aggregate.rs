use serde::{Deserialize, Serialize};

use super::super::domain::{JobFamily, ScoreSet};
use super::policy::{decide, Recommendation};
use super::rules::{evaluate_red_flag, RedFlag};

pub const AGGREGATE_RED_FLAG_REASON: &str = "One or more red flags";

/// Raw ratings plus the percent recorded when the evaluation was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvaluation {
    pub scores: ScoreSet,
    pub percent: u8,
}

/// Candidate-level summary across every evaluation received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub count: usize,
    pub percent_avg: u8,
    pub red_flag_triggered: bool,
    pub recommendation: Recommendation,
}

/// Stored percents are averaged as-is; they are never recomputed from the scores.
fn average_percent(history: &[HistoricalEvaluation]) -> u8 {
    if history.is_empty() {
        return 0;
    }

    let count = history.len() as u64;
    let total: u64 = history
        .iter()
        .map(|evaluation| u64::from(evaluation.percent.min(100)))
        .sum();

    // (2 * total + count) / (2 * count) rounds the mean half-up.
    ((2 * total + count) / (2 * count)) as u8
}

/// Which evaluation raised the flag is not kept; the first hit is enough.
fn any_red_flag(family: JobFamily, history: &[HistoricalEvaluation]) -> RedFlag {
    let triggered = history
        .iter()
        .any(|evaluation| evaluation_red_flagged(family, &evaluation.scores));

    if triggered {
        RedFlag::raised(AGGREGATE_RED_FLAG_REASON)
    } else {
        RedFlag::clear()
    }
}

fn evaluation_red_flagged(family: JobFamily, scores: &ScoreSet) -> bool {
    evaluate_red_flag(family, scores).triggered
}

pub fn aggregate(family: JobFamily, history: &[HistoricalEvaluation]) -> AggregateResult {
    let percent_avg = average_percent(history);
    let red_flag = any_red_flag(family, history);
    let decision = decide(family, percent_avg, &red_flag);

    tracing::debug!(
        %family,
        count = history.len(),
        percent_avg,
        red_flag = red_flag.triggered,
        recommendation = %decision.recommendation,
        "aggregated evaluation history"
    );

    AggregateResult {
        count: history.len(),
        percent_avg,
        red_flag_triggered: red_flag.triggered,
        recommendation: decision.recommendation,
    }
}
