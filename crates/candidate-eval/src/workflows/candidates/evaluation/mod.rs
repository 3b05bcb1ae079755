mod config;
mod rules;

pub use config::EvaluationConfig;

use super::domain::{Candidate, CandidateStatus, EvaluationRequest, JobRole, ValidationError};
use serde::Serialize;

/// Stateless evaluator that validates a form and derives the candidate's verdict.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Builds a candidate from raw form input. Average and status are derived here once and
    /// never recomputed afterwards.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<Candidate, ValidationError> {
        let name = rules::required(&request.name, "name")?;
        let email = rules::normalize_email(&request.email, &self.config.email_domain)?;
        let role_label = rules::required(request.role.as_deref().unwrap_or_default(), "role")?;
        let role = JobRole::from_label(&role_label)
            .ok_or_else(|| ValidationError::UnknownRole(role_label.clone()))?;

        let technical_score = request.technical_score.parse_integer("technical score")?;
        let communication_score = request
            .communication_score
            .parse_integer("communication score")?;
        let experience_years = request.experience_years.parse_integer("experience years")?;

        let average_score = rules::average_score(technical_score, communication_score);
        let status = self.classify(average_score, experience_years);

        let photo = request
            .photo
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_string);

        Ok(Candidate {
            name,
            email,
            role,
            technical_score,
            communication_score,
            experience_years,
            status,
            average_score,
            photo,
        })
    }

    /// Verdict for an average and experience pair under the current thresholds.
    pub fn classify(&self, average_score: f64, experience_years: i32) -> CandidateStatus {
        rules::classify(&self.config, average_score, experience_years)
    }

    /// Compares a stored verdict with what the current rule would assign to the same scores.
    pub fn drift(&self, candidate: &Candidate) -> StatusDrift {
        let current = self.classify(
            rules::average_score(candidate.technical_score, candidate.communication_score),
            candidate.experience_years,
        );

        StatusDrift {
            stored: candidate.status,
            current,
        }
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new(EvaluationConfig::standard())
    }
}

/// Stored verdict next to the verdict the rule gives today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDrift {
    pub stored: CandidateStatus,
    pub current: CandidateStatus,
}

impl StatusDrift {
    pub fn has_drifted(&self) -> bool {
        self.stored != self.current
    }
}
