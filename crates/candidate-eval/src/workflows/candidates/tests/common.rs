use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::candidates::domain::{Candidate, EvaluationRequest, JobRole};
use crate::workflows::candidates::evaluation::{EvaluationConfig, EvaluationEngine};
use crate::workflows::candidates::repository::CandidateRepository;
use crate::workflows::candidates::service::CandidateService;
use crate::workflows::storage::StorageError;

pub(super) fn engine() -> EvaluationEngine {
    EvaluationEngine::new(EvaluationConfig::standard())
}

pub(super) fn request(
    name: &str,
    role: JobRole,
    technical: i64,
    communication: i64,
    experience: i64,
) -> EvaluationRequest {
    EvaluationRequest {
        name: name.to_string(),
        email: name.to_lowercase().replace(' ', "."),
        role: Some(role.label().to_string()),
        technical_score: technical.into(),
        communication_score: communication.into(),
        experience_years: experience.into(),
        photo: None,
    }
}

pub(super) fn candidate(
    name: &str,
    role: JobRole,
    technical: i64,
    communication: i64,
    experience: i64,
) -> Candidate {
    engine()
        .evaluate(&request(name, role, technical, communication, experience))
        .expect("fixture evaluates")
}

/// Candidate whose two scores both equal `average`.
pub(super) fn scored(name: &str, average: i64) -> Candidate {
    candidate(name, JobRole::SoftwareEngineer, average, average, 3)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    pub(super) records: Mutex<Vec<Candidate>>,
    pub(super) persisted: AtomicUsize,
}

impl MemoryRepository {
    pub(super) fn with(candidates: Vec<Candidate>) -> Self {
        Self {
            records: Mutex::new(candidates),
            persisted: AtomicUsize::new(0),
        }
    }

    pub(super) fn persist_count(&self) -> usize {
        self.persisted.load(Ordering::SeqCst)
    }
}

impl CandidateRepository for MemoryRepository {
    fn append(&self, candidate: Candidate) -> Result<usize, StorageError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.push(candidate);
        self.persisted.fetch_add(1, Ordering::SeqCst);
        Ok(guard.len())
    }

    fn snapshot(&self) -> Result<Vec<Candidate>, StorageError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

pub(super) struct UnavailableRepository;

impl CandidateRepository for UnavailableRepository {
    fn append(&self, _candidate: Candidate) -> Result<usize, StorageError> {
        Err(StorageError::Poisoned)
    }

    fn snapshot(&self) -> Result<Vec<Candidate>, StorageError> {
        Err(StorageError::Poisoned)
    }
}

pub(super) fn service_with(
    candidates: Vec<Candidate>,
    offers_dir: PathBuf,
) -> (CandidateService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with(candidates));
    let service = CandidateService::new(
        repository.clone(),
        EvaluationConfig::standard(),
        offers_dir,
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
