use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::accounts::AccountError;
use crate::workflows::candidates::{CandidateServiceError, OfferError};
use crate::workflows::storage::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Task(tokio::task::JoinError),
    Storage(StorageError),
    Candidates(CandidateServiceError),
    Accounts(AccountError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Task(err) => write!(f, "background task failed: {}", err),
            AppError::Storage(err) => write!(f, "storage error: {}", err),
            AppError::Candidates(err) => write!(f, "{}", err),
            AppError::Accounts(err) => write!(f, "account error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Task(err) => Some(err),
            AppError::Storage(err) => Some(err),
            AppError::Candidates(err) => Some(err),
            AppError::Accounts(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Candidates(CandidateServiceError::Validation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Candidates(CandidateServiceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Candidates(CandidateServiceError::Offer(OfferError::NotHired { .. })) => {
                StatusCode::CONFLICT
            }
            AppError::Accounts(AccountError::MissingField { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Accounts(AccountError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Task(_)
            | AppError::Storage(_)
            | AppError::Candidates(_)
            | AppError::Accounts(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Task(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<CandidateServiceError> for AppError {
    fn from(value: CandidateServiceError) -> Self {
        Self::Candidates(value)
    }
}

impl From<AccountError> for AppError {
    fn from(value: AccountError) -> Self {
        Self::Accounts(value)
    }
}
