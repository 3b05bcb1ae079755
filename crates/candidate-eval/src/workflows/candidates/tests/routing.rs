use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::candidates::domain::JobRole;
use crate::workflows::candidates::router::candidate_router;
use crate::workflows::candidates::{CandidateService, CsvCandidateRepository, EvaluationConfig};

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn submit_returns_created_candidate() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (service, repository) = service_with(Vec::new(), dir.path().to_path_buf());
    let app = candidate_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/candidates",
            json!({
                "name": "Ada Lovelace",
                "email": "ada",
                "role": "software engineer",
                "technical_score": "90",
                "communication_score": 80,
                "experience_years": 2
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["position"], 1);
    assert_eq!(body["status_label"], "HIRED");
    assert_eq!(body["candidate"]["email"], "ada@gmail.com");
    assert_eq!(body["candidate"]["average_score"], 85.0);
    assert_eq!(repository.persist_count(), 1);
}

#[tokio::test]
async fn invalid_submission_is_unprocessable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (service, repository) = service_with(Vec::new(), dir.path().to_path_buf());
    let app = candidate_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/candidates",
            json!({
                "name": "Ada",
                "email": "ada",
                "role": "Software Engineer",
                "technical_score": "ninety",
                "communication_score": 80,
                "experience_years": 2
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("ninety"));
    assert_eq!(repository.persist_count(), 0);
}

#[tokio::test]
async fn dashboard_reports_kpis() {
    let dir = tempfile::tempdir().expect("temp dir");
    let candidates = vec![
        candidate("Ada", JobRole::SoftwareEngineer, 90, 90, 4),
        candidate("Bob", JobRole::QaAnalyst, 20, 30, 1),
    ];
    let (service, _) = service_with(candidates, dir.path().to_path_buf());
    let app = candidate_router(Arc::new(service));

    let response = app.oneshot(get("/api/v1/dashboard")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["kpis"]["total_candidates"], 2);
    assert_eq!(body["kpis"]["positions_filled"], 1);
    assert_eq!(body["kpis"]["success_rate_label"], "50%");
    assert_eq!(body["top_performers"][0]["name"], "Ada");
    assert_eq!(body["trend"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn roster_honours_the_search_query() {
    let dir = tempfile::tempdir().expect("temp dir");
    let candidates = vec![scored("Ada Lovelace", 80), scored("Grace Hopper", 70)];
    let (service, _) = service_with(candidates, dir.path().to_path_buf());
    let app = candidate_router(Arc::new(service));

    let response = app
        .oneshot(get("/api/v1/candidates?search=hop"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    let entries = body.as_array().expect("roster array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["position"], 2);
    assert_eq!(entries[0]["name"], "Grace Hopper");
}

#[tokio::test]
async fn detail_of_unknown_position_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (service, _) = service_with(vec![scored("Only", 80)], dir.path().to_path_buf());
    let app = candidate_router(Arc::new(service));

    let found = app
        .clone()
        .oneshot(get("/api/v1/candidates/1"))
        .await
        .expect("response");
    assert_eq!(found.status(), StatusCode::OK);
    let body = read_json_body(found).await;
    assert_eq!(body["rank_label"], "Top 100%");

    let missing = app
        .oneshot(get("/api/v1/candidates/7"))
        .await
        .expect("response");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn offers_for_unhired_candidates_conflict() {
    let dir = tempfile::tempdir().expect("temp dir");
    let candidates = vec![
        candidate("Ada Lovelace", JobRole::SoftwareEngineer, 90, 90, 4),
        candidate("Bob", JobRole::QaAnalyst, 20, 30, 1),
    ];
    let offers = dir.path().join("offers");
    let (service, _) = service_with(candidates, offers.clone());
    let app = candidate_router(Arc::new(service));

    let refused = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/candidates/2/offer", json!({})))
        .await
        .expect("response");
    assert_eq!(refused.status(), StatusCode::CONFLICT);

    let issued = app
        .oneshot(json_request("POST", "/api/v1/candidates/1/offer", json!({})))
        .await
        .expect("response");
    assert_eq!(issued.status(), StatusCode::CREATED);
    let body = read_json_body(issued).await;
    assert_eq!(
        body["path"],
        offers.join("Offer_Ada_Lovelace.html").display().to_string()
    );
}

#[tokio::test]
async fn failed_saves_answer_500_and_are_not_counted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    let repository =
        CsvCandidateRepository::open(blocker.join("candidates.csv")).expect("open empty store");
    let service = CandidateService::new(
        Arc::new(repository),
        EvaluationConfig::standard(),
        dir.path().join("offers"),
    );
    let app = candidate_router(Arc::new(service));
    std::fs::write(&blocker, "not a directory").expect("block parent");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/candidates",
            json!({
                "name": "Ada",
                "email": "ada",
                "role": "QA Analyst",
                "technical_score": 90,
                "communication_score": 90,
                "experience_years": 3
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .starts_with("failed to write"));

    let dashboard = app.oneshot(get("/api/v1/dashboard")).await.expect("response");
    let body = read_json_body(dashboard).await;
    assert_eq!(body["kpis"]["total_candidates"], 0);
}
