use super::super::domain::{CandidateStatus, ValidationError};
use super::config::EvaluationConfig;

/// Plain mean of the two scores, computed in floating point so large inputs cannot overflow.
pub(crate) fn average_score(technical: i32, communication: i32) -> f64 {
    (f64::from(technical) + f64::from(communication)) / 2.0
}

/// Ordered decision list; the first matching rule wins.
pub(crate) fn classify(config: &EvaluationConfig, average: f64, experience: i32) -> CandidateStatus {
    if average >= config.hire_average && experience >= config.hire_min_experience {
        return CandidateStatus::Hired;
    }

    if average >= config.shortlist_average {
        return CandidateStatus::Shortlisted;
    }

    if average >= config.hold_average && experience > config.hold_experience_above {
        return CandidateStatus::OnHold;
    }

    CandidateStatus::Rejected
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Bare handles get the configured domain appended; full addresses pass through.
pub(crate) fn normalize_email(raw: &str, domain: &str) -> Result<String, ValidationError> {
    let handle = required(raw, "email")?;
    if handle.contains('@') {
        Ok(handle)
    } else {
        Ok(format!("{handle}@{domain}"))
    }
}
