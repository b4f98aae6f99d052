use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::scoring::router::{score_handler, score_submission};
use crate::scoring::{evaluate, sleep_router, ScoreResponse, ScoreResult, SleepMetrics};

#[tokio::test]
async fn score_handler_returns_scored_payload() {
    let response = score_handler(Ok(axum::Json(submission()))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 100);
    assert_eq!(payload["bioAgeDelta"], "+0.0");
    assert_eq!(payload["alerts"], json!([]));
    assert_eq!(payload["suggestions"], json!([]));
    assert!(payload.get("components").is_none());
}

#[tokio::test]
async fn score_handler_rejects_invalid_submission() {
    let mut submission = submission();
    submission.age = Some(0);

    let response = score_handler(Ok(axum::Json(submission))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 0);
    assert!(payload["bioAgeDelta"].is_null());
    assert_eq!(
        payload["alerts"],
        json!(["age must be between 1 and 120 (found 0)"])
    );
    assert_eq!(payload["suggestions"], json!([]));
}

#[tokio::test]
async fn score_route_accepts_json_payloads() {
    let body = json!({
        "totalSleepHours": 6,
        "sleepEfficiencyPercent": 72,
        "remPercent": 35,
        "age": 15,
        "sex": "Male"
    });

    let response = sleep_router()
        .oneshot(
            Request::post("/api/sleep/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload: ScoreResponse =
        serde_json::from_value(read_json_body(response).await).expect("score response");
    assert_eq!(payload.score, 75);
    assert_eq!(payload.bio_age_delta.as_deref(), Some("+2.5"));
    assert_eq!(payload.alerts.len(), 3);
    assert_eq!(payload.suggestions.len(), 3);
}

#[tokio::test]
async fn score_route_reports_missing_fields() {
    let response = sleep_router()
        .oneshot(
            Request::post("/api/sleep/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"totalSleepHours": 7}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["alerts"], json!(["sleepEfficiencyPercent is required"]));
}

#[test]
fn internal_error_body_carries_generic_alert() {
    let body = ScoreResponse::internal_error();
    assert_eq!(body.score, 0);
    assert!(body.bio_age_delta.is_none());
    assert_eq!(body.alerts, vec!["An internal server error occurred."]);
    assert!(body.suggestions.is_empty());
}

async fn post_score(body: &'static str) -> axum::response::Response {
    sleep_router()
        .oneshot(
            Request::post("/api/sleep/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn score_route_rejects_wrong_typed_fields_with_score_body() {
    let response = post_score(
        r#"{"totalSleepHours":7,"sleepEfficiencyPercent":90,"remPercent":20,"age":"thirty","sex":"Male"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: ScoreResponse =
        serde_json::from_value(read_json_body(response).await).expect("score response");
    assert_eq!(payload.score, 0);
    assert!(payload.bio_age_delta.is_none());
    assert_eq!(payload.alerts.len(), 1);
    assert!(payload.alerts[0].contains("thirty"));
    assert!(payload.suggestions.is_empty());
}

#[tokio::test]
async fn score_route_rejects_fractional_age_and_truncated_json() {
    for body in [
        r#"{"totalSleepHours":7,"sleepEfficiencyPercent":90,"remPercent":20,"age":30.5,"sex":"Male"}"#,
        r#"{"totalSleepHours":7"#,
    ] {
        let response = post_score(body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
        let payload = read_json_body(response).await;
        assert_eq!(payload["score"], 0);
        assert!(payload["bioAgeDelta"].is_null());
        assert_eq!(payload["alerts"].as_array().map(Vec::len), Some(1));
        assert_eq!(payload["suggestions"], json!([]));
    }
}

#[tokio::test]
async fn panicking_evaluator_yields_internal_error_body() {
    let failing = |_: &SleepMetrics| -> ScoreResult { panic!("rule table corrupted") };

    let response = score_submission(Ok(axum::Json(submission())), failing);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: ScoreResponse =
        serde_json::from_value(read_json_body(response).await).expect("score response");
    assert_eq!(payload, ScoreResponse::internal_error());
}

#[tokio::test]
async fn injected_evaluator_drives_the_success_body() {
    let response = score_submission(Ok(axum::Json(submission())), evaluate);

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["score"], 100);
}
