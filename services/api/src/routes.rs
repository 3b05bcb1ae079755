use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use candidate_eval::workflows::candidates::{
    candidate_router, CandidateRepository, CandidateService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_candidate_routes<R>(service: Arc<CandidateService<R>>) -> axum::Router
where
    R: CandidateRepository + 'static,
{
    candidate_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use candidate_eval::workflows::candidates::{CsvCandidateRepository, EvaluationConfig};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn test_app(dir: &tempfile::TempDir, state: AppState) -> axum::Router {
        let repository = CsvCandidateRepository::open(dir.path().join("candidates.csv"))
            .expect("open empty store");
        let service = CandidateService::new(
            Arc::new(repository),
            EvaluationConfig::standard(),
            dir.path().join("offers"),
        );
        with_candidate_routes(Arc::new(service)).layer(Extension(state))
    }

    async fn status_of(app: axum::Router, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
        .status()
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = test_state(false);
        let app = test_app(&dir, state.clone());

        assert_eq!(
            status_of(app.clone(), "/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
        state.readiness.store(true, Ordering::Relaxed);
        assert_eq!(status_of(app, "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_metrics_and_dashboard_share_one_router() {
        let dir = tempfile::tempdir().expect("temp dir");
        let app = test_app(&dir, test_state(true));

        assert_eq!(status_of(app.clone(), "/health").await, StatusCode::OK);
        assert_eq!(status_of(app.clone(), "/metrics").await, StatusCode::OK);
        assert_eq!(
            status_of(app.clone(), "/api/v1/dashboard").await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(app, "/api/v1/candidates/1").await,
            StatusCode::NOT_FOUND
        );
    }
}
