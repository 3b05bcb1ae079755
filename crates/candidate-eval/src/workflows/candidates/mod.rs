//! Candidate intake, verdicts, dashboard aggregation, and offer letters.

mod codec;
pub mod domain;
pub mod evaluation;
pub mod offer;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateStatus, EvaluationRequest, JobRole, RawField, ValidationError,
};
pub use evaluation::{EvaluationConfig, EvaluationEngine, StatusDrift};
pub use offer::{OfferError, OfferLetter};
pub use report::{percentile, summarize, CandidateSummary};
pub use repository::{CandidateRepository, CsvCandidateRepository};
pub use router::candidate_router;
pub use service::{CandidateService, CandidateServiceError, DriftEntry, SubmittedCandidate};
