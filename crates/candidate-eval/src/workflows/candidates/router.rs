use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::EvaluationRequest;
use super::report::views::{CandidateDetailView, DashboardView, RosterEntry};
use super::repository::CandidateRepository;
use super::service::{CandidateService, SubmittedCandidate};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RosterQuery {
    #[serde(default)]
    search: Option<String>,
}

/// Router exposing the dashboard, roster, detail pane, intake form, and offer letters.
pub fn candidate_router<R>(service: Arc<CandidateService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .route(
            "/api/v1/candidates",
            get(roster_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/v1/candidates/:position", get(detail_handler::<R>))
        .route(
            "/api/v1/candidates/:position/offer",
            post(offer_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
) -> Result<Json<DashboardView>, AppError>
where
    R: CandidateRepository + 'static,
{
    Ok(Json(service.dashboard()?))
}

pub(crate) async fn roster_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<Vec<RosterEntry>>, AppError>
where
    R: CandidateRepository + 'static,
{
    Ok(Json(service.roster(query.search.as_deref())?))
}

/// File writes run on the blocking pool so a slow disk never stalls the async workers.
pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Json(request): Json<EvaluationRequest>,
) -> Result<(StatusCode, Json<SubmittedCandidate>), AppError>
where
    R: CandidateRepository + 'static,
{
    let submitted = tokio::task::spawn_blocking(move || service.submit(&request)).await??;
    Ok((StatusCode::CREATED, Json(submitted)))
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Path(position): Path<usize>,
) -> Result<Json<CandidateDetailView>, AppError>
where
    R: CandidateRepository + 'static,
{
    Ok(Json(service.detail(position)?))
}

pub(crate) async fn offer_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Path(position): Path<usize>,
) -> Result<(StatusCode, Json<Value>), AppError>
where
    R: CandidateRepository + 'static,
{
    let path = tokio::task::spawn_blocking(move || service.issue_offer(position)).await??;
    let payload = json!({
        "position": position,
        "path": path.display().to_string(),
    });
    Ok((StatusCode::CREATED, Json(payload)))
}
