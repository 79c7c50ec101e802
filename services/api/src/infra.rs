use candidate_eval::workflows::evaluations::{
    CandidateDirectory, CandidateId, EvaluationKey, EvaluationQuery, EvaluationRecord,
    EvaluationRepository, ImportError, JobFamily, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Upserts on the (candidate, round, interviewer) key.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<EvaluationKey, EvaluationRecord>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
    fn upsert(&self, mut record: EvaluationRecord) -> Result<EvaluationRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        let key = record.key();
        if let Some(existing) = guard.get(&key) {
            record.created_at = existing.created_at;
        }
        guard.insert(key, record.clone());
        Ok(record)
    }

    fn list(&self, query: &EvaluationQuery) -> Result<Vec<EvaluationRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))?;
        let mut records: Vec<_> = guard
            .values()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateDirectory {
    families: Arc<Mutex<HashMap<CandidateId, JobFamily>>>,
}

impl InMemoryCandidateDirectory {
    pub(crate) fn register(&self, candidate_id: CandidateId, family: JobFamily) {
        if let Ok(mut guard) = self.families.lock() {
            guard.insert(candidate_id, family);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.families.lock().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl CandidateDirectory for InMemoryCandidateDirectory {
    fn applied_family(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<JobFamily>, RepositoryError> {
        let guard = self
            .families
            .lock()
            .map_err(|_| RepositoryError::Unavailable("directory mutex poisoned".to_string()))?;
        Ok(guard.get(candidate_id).copied())
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    candidate_id: String,
    applied_family: JobFamily,
}

/// Loads `candidate_id,applied_family` rows; unknown families fall back like any other tag.
pub(crate) fn load_candidates<R: Read>(
    reader: R,
    directory: &InMemoryCandidateDirectory,
) -> Result<usize, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loaded = 0;
    for row in csv_reader.deserialize::<CandidateRow>() {
        let row = row?;
        directory.register(CandidateId(row.candidate_id), row.applied_family);
        loaded += 1;
    }

    Ok(loaded)
}

pub(crate) fn load_candidates_from_path(
    path: &Path,
    directory: &InMemoryCandidateDirectory,
) -> Result<usize, ImportError> {
    let file = std::fs::File::open(path)?;
    load_candidates(file, directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_candidate_rows_with_fallback_family() {
        let directory = InMemoryCandidateDirectory::default();
        let csv = "candidate_id,applied_family\nc-1, qaqc_metrology\nc-2,astronaut\n";

        let loaded = load_candidates(Cursor::new(csv), &directory).expect("rows load");

        assert_eq!(loaded, 2);
        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory
                .applied_family(&CandidateId("c-1".to_string()))
                .expect("lookup"),
            Some(JobFamily::QaqcMetrology)
        );
        assert_eq!(
            directory
                .applied_family(&CandidateId("c-2".to_string()))
                .expect("lookup"),
            Some(JobFamily::EngineeringProjects)
        );
    }
}
