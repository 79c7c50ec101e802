use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::evaluations::domain::{
    CandidateId, EvaluationKey, EvaluationRecord, EvaluationSubmission, InterviewerId, JobFamily,
    RoundId, ScoreSet,
};
use crate::workflows::evaluations::repository::{
    CandidateDirectory, EvaluationQuery, EvaluationRepository, RepositoryError,
};
use crate::workflows::evaluations::scoring::Recommendation;
use crate::workflows::evaluations::{evaluation_router, EvaluationService};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<EvaluationKey, EvaluationRecord>>>,
}

impl MemoryRepository {
    pub(super) fn seed(&self, record: EvaluationRecord) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(record.key(), record);
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl EvaluationRepository for MemoryRepository {
    fn upsert(&self, mut record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if let Some(existing) = guard.get(&record.key()) {
            record.created_at = existing.created_at;
        }
        guard.insert(record.key(), record.clone());
        Ok(record)
    }

    fn list(&self, query: &EvaluationQuery) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl EvaluationRepository for UnavailableRepository {
    fn upsert(&self, _record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _query: &EvaluationQuery) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCandidates {
    families: Arc<Mutex<HashMap<CandidateId, JobFamily>>>,
}

impl MemoryCandidates {
    pub(super) fn with(entries: &[(&str, JobFamily)]) -> Self {
        let directory = Self::default();
        {
            let mut guard = directory.families.lock().expect("directory mutex poisoned");
            for (id, family) in entries {
                guard.insert(CandidateId(id.to_string()), *family);
            }
        }
        directory
    }
}

impl CandidateDirectory for MemoryCandidates {
    fn applied_family(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<JobFamily>, RepositoryError> {
        let guard = self.families.lock().expect("directory mutex poisoned");
        Ok(guard.get(candidate_id).copied())
    }
}

pub(super) fn candidates() -> MemoryCandidates {
    MemoryCandidates::with(&[
        ("cand-eng", JobFamily::EngineeringProjects),
        ("cand-qa", JobFamily::QaqcMetrology),
        ("cand-hse", JobFamily::SafetySecurity),
    ])
}

pub(super) fn build_service() -> (
    EvaluationService<MemoryRepository, MemoryCandidates>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = EvaluationService::new(repository.clone(), Arc::new(candidates()));
    (service, repository)
}

pub(super) fn submission(candidate: &str, round: &str, scores: ScoreSet) -> EvaluationSubmission {
    EvaluationSubmission {
        candidate_id: CandidateId(candidate.to_string()),
        round_id: RoundId(round.to_string()),
        interviewer_id: InterviewerId("int-ayla".to_string()),
        scores,
        notes: None,
    }
}

pub(super) fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn stored(
    candidate: &str,
    round: &str,
    interviewer: &str,
    scores: ScoreSet,
    eval_percent: u8,
    created_at: DateTime<Utc>,
) -> EvaluationRecord {
    EvaluationRecord {
        candidate_id: CandidateId(candidate.to_string()),
        round_id: RoundId(round.to_string()),
        interviewer_id: InterviewerId(interviewer.to_string()),
        scores,
        eval_percent,
        recommendation: Recommendation::Hold,
        notes: None,
        created_at,
        updated_at: created_at,
    }
}

pub(super) fn router_with_service(
    service: EvaluationService<MemoryRepository, MemoryCandidates>,
) -> axum::Router {
    evaluation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
