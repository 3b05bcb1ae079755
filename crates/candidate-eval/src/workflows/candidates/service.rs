use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{Candidate, EvaluationRequest, ValidationError};
use super::evaluation::{EvaluationConfig, EvaluationEngine, StatusDrift};
use super::offer::{OfferError, OfferLetter};
use super::report::views::{CandidateDetailView, DashboardView, RosterEntry};
use super::report::{candidate_detail, roster, summarize, CandidateSummary};
use super::repository::CandidateRepository;
use crate::workflows::storage::StorageError;

/// Service composing the evaluation engine, the candidate store, and the offer directory.
pub struct CandidateService<R> {
    repository: Arc<R>,
    engine: Arc<EvaluationEngine>,
    offers_dir: PathBuf,
}

/// Candidate accepted by [`CandidateService::submit`] together with where it landed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedCandidate {
    pub position: usize,
    pub status_label: &'static str,
    pub candidate: Candidate,
}

/// Candidate whose stored verdict no longer matches the rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftEntry {
    pub position: usize,
    pub name: String,
    pub drift: StatusDrift,
}

impl<R> CandidateService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EvaluationConfig, offers_dir: PathBuf) -> Self {
        Self {
            repository,
            engine: Arc::new(EvaluationEngine::new(config)),
            offers_dir,
        }
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    /// Evaluate a form and append the candidate. Nothing is kept unless the data file was saved.
    pub fn submit(
        &self,
        request: &EvaluationRequest,
    ) -> Result<SubmittedCandidate, CandidateServiceError> {
        let candidate = self.engine.evaluate(request)?;
        let position = self.repository.append(candidate.clone())?;

        info!(
            position,
            role = candidate.role().label(),
            status = candidate.status().label(),
            average = candidate.average_score(),
            "candidate evaluated"
        );

        Ok(SubmittedCandidate {
            position,
            status_label: candidate.status().label(),
            candidate,
        })
    }

    pub fn summary(&self) -> Result<CandidateSummary, CandidateServiceError> {
        let candidates = self.repository.snapshot()?;
        Ok(summarize(&candidates))
    }

    pub fn dashboard(&self) -> Result<DashboardView, CandidateServiceError> {
        Ok(self.summary()?.dashboard())
    }

    pub fn roster(&self, query: Option<&str>) -> Result<Vec<RosterEntry>, CandidateServiceError> {
        let candidates = self.repository.snapshot()?;
        Ok(roster(&candidates, query))
    }

    pub fn detail(&self, position: usize) -> Result<CandidateDetailView, CandidateServiceError> {
        let candidates = self.repository.snapshot()?;
        candidate_detail(&candidates, position, &self.engine)
            .ok_or(CandidateServiceError::NotFound { position })
    }

    /// Write the offer letter for a hired candidate and return its path.
    pub fn issue_offer(&self, position: usize) -> Result<PathBuf, CandidateServiceError> {
        let candidates = self.repository.snapshot()?;
        let candidate = position
            .checked_sub(1)
            .and_then(|index| candidates.get(index))
            .ok_or(CandidateServiceError::NotFound { position })?;

        let letter = OfferLetter::for_candidate(candidate)?;
        let path = letter.write_to(&self.offers_dir)?;
        info!(position, path = %path.display(), "offer letter written");
        Ok(path)
    }

    /// Candidates whose frozen verdict differs from what the rule assigns today.
    pub fn drift_report(&self) -> Result<Vec<DriftEntry>, CandidateServiceError> {
        let candidates = self.repository.snapshot()?;
        let drifted: Vec<DriftEntry> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let drift = self.engine.drift(candidate);
                drift.has_drifted().then(|| DriftEntry {
                    position: index + 1,
                    name: candidate.name().to_string(),
                    drift,
                })
            })
            .collect();

        for entry in &drifted {
            warn!(
                position = entry.position,
                stored = entry.drift.stored.label(),
                current = entry.drift.current.label(),
                "stored verdict differs from current rule"
            );
        }

        Ok(drifted)
    }
}

/// Error raised by the candidate service.
#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Offer(#[from] OfferError),
    #[error("no candidate at position {position}")]
    NotFound { position: usize },
}
