use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CandidateId, EvaluationSubmission, JobFamily, RoundId, ScoreSet};
use super::repository::{CandidateDirectory, EvaluationQuery, EvaluationRepository};
use super::scoring::{compute_aggregate, compute_evaluation, HistoricalEvaluation};
use super::service::{EvaluationService, EvaluationServiceError};

/// Router builder exposing evaluation intake, listing, and aggregation.
pub fn evaluation_router<R, C>(service: Arc<EvaluationService<R, C>>) -> Router
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/evaluations",
            post(submit_handler::<R, C>).get(list_handler::<R, C>),
        )
        .route(
            "/api/v1/evaluations/aggregate",
            get(aggregate_handler::<R, C>),
        )
        .with_state(service)
        .merge(scoring_router())
}

/// Storage-free scoring endpoints over caller-supplied inputs.
pub fn scoring_router() -> Router {
    Router::new()
        .route("/api/v1/scoring/evaluate", post(score_handler))
        .route("/api/v1/scoring/aggregate", post(score_aggregate_handler))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    #[serde(default)]
    candidate_id: Option<String>,
    #[serde(default)]
    round_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregateParams {
    #[serde(default)]
    candidate_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    family: JobFamily,
    scores: ScoreSet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreAggregateRequest {
    family: JobFamily,
    #[serde(default)]
    history: Vec<HistoricalEvaluation>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn error_response(error: EvaluationServiceError) -> Response {
    let status = match &error {
        EvaluationServiceError::MissingField(_) => StatusCode::BAD_REQUEST,
        EvaluationServiceError::CandidateNotFound(_) => StatusCode::NOT_FOUND,
        EvaluationServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(%error, "evaluation request failed");
    }

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<EvaluationService<R, C>>>,
    Json(submission): Json<EvaluationSubmission>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, C>(
    State(service): State<Arc<EvaluationService<R, C>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    let query = EvaluationQuery {
        candidate_id: non_empty(params.candidate_id).map(CandidateId),
        round_id: non_empty(params.round_id).map(RoundId),
    };

    match service.list(&query) {
        Ok(evaluations) => {
            (StatusCode::OK, Json(json!({ "evaluations": evaluations }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn aggregate_handler<R, C>(
    State(service): State<Arc<EvaluationService<R, C>>>,
    Query(params): Query<AggregateParams>,
) -> Response
where
    R: EvaluationRepository + 'static,
    C: CandidateDirectory + 'static,
{
    let Some(candidate_id) = non_empty(params.candidate_id) else {
        return error_response(EvaluationServiceError::MissingField("candidate_id"));
    };

    match service.aggregate(&CandidateId(candidate_id)) {
        Ok(aggregate) => (StatusCode::OK, Json(aggregate)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(Json(request): Json<ScoreRequest>) -> Response {
    let result = compute_evaluation(request.family, &request.scores);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn score_aggregate_handler(
    Json(request): Json<ScoreAggregateRequest>,
) -> Response {
    let result = compute_aggregate(request.family, &request.history);
    (StatusCode::OK, Json(result)).into_response()
}
