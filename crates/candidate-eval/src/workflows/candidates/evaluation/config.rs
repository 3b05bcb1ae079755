use serde::{Deserialize, Serialize};

/// Thresholds for the verdict decision list plus the intake e-mail domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub hire_average: f64,
    pub hire_min_experience: i32,
    pub shortlist_average: f64,
    pub hold_average: f64,
    /// Experience must be strictly greater than this for an on-hold verdict.
    pub hold_experience_above: i32,
    pub email_domain: String,
}

impl EvaluationConfig {
    pub fn standard() -> Self {
        Self {
            hire_average: 85.0,
            hire_min_experience: 2,
            shortlist_average: 70.0,
            hold_average: 50.0,
            hold_experience_above: 5,
            email_domain: "gmail.com".to_string(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::standard()
    }
}
