use std::fmt;

use serde::{Deserialize, Serialize};

/// Positions the desk recruits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    SoftwareEngineer,
    QaAnalyst,
    ProductManager,
    UiUxDesigner,
    SystemAdmin,
}

impl JobRole {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SoftwareEngineer,
            Self::QaAnalyst,
            Self::ProductManager,
            Self::UiUxDesigner,
            Self::SystemAdmin,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::QaAnalyst => "QA Analyst",
            Self::ProductManager => "Product Manager",
            Self::UiUxDesigner => "UI/UX Designer",
            Self::SystemAdmin => "System Admin",
        }
    }

    /// Matches a display label, ignoring case and surrounding whitespace.
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Four-way verdict assigned when a candidate is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Hired,
    Shortlisted,
    OnHold,
    Rejected,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hired => "HIRED",
            Self::Shortlisted => "SHORTLISTED",
            Self::OnHold => "ON HOLD",
            Self::Rejected => "REJECTED",
        }
    }

    /// Accepts both the stored `ON HOLD` spelling and `ON_HOLD`.
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().replace('_', " ").as_str() {
            "HIRED" => Some(Self::Hired),
            "SHORTLISTED" => Some(Self::Shortlisted),
            "ON HOLD" => Some(Self::OnHold),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluation record. Scores and verdict are fixed at creation; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: JobRole,
    pub(crate) technical_score: i32,
    pub(crate) communication_score: i32,
    pub(crate) experience_years: i32,
    pub(crate) status: CandidateStatus,
    pub(crate) average_score: f64,
    pub(crate) photo: Option<String>,
}

impl Candidate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> JobRole {
        self.role
    }

    pub fn technical_score(&self) -> i32 {
        self.technical_score
    }

    pub fn communication_score(&self) -> i32 {
        self.communication_score
    }

    pub fn experience_years(&self) -> i32 {
        self.experience_years
    }

    /// Verdict recorded at creation time.
    pub fn status(&self) -> CandidateStatus {
        self.status
    }

    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }
}

/// Untyped form input. Scores arrive as text from the CLI and as text or numbers over JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Default for RawField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl RawField {
    pub(crate) fn parse_integer(&self, field: &'static str) -> Result<i32, ValidationError> {
        let not_an_integer = |value: String| ValidationError::NotAnInteger { field, value };
        match self {
            RawField::Integer(value) => {
                i32::try_from(*value).map_err(|_| not_an_integer(value.to_string()))
            }
            RawField::Decimal(value) => Err(not_an_integer(value.to_string())),
            RawField::Text(value) => value
                .trim()
                .parse::<i32>()
                .map_err(|_| not_an_integer(value.clone())),
        }
    }
}

/// The evaluation form as submitted, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub name: String,
    /// Either a full address or a bare handle that receives the configured domain.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub technical_score: RawField,
    #[serde(default)]
    pub communication_score: RawField,
    #[serde(default)]
    pub experience_years: RawField,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Rejection of an evaluation form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("'{0}' is not a recognised job role")]
    UnknownRole(String),
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },
}
