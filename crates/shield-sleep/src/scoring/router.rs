use std::panic::{self, AssertUnwindSafe};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{error, info, warn};

use super::domain::SleepMetrics;
use super::response::ScoreResponse;
use super::validation::MetricsSubmission;
use super::{evaluate, ScoreResult};

/// Router builder exposing the sleep scoring endpoint.
pub fn sleep_router() -> Router {
    Router::new().route("/api/sleep/score", post(score_handler))
}

pub(crate) async fn score_handler(
    payload: Result<Json<MetricsSubmission>, JsonRejection>,
) -> Response {
    score_submission(payload, evaluate)
}

/// Validates, scores and renders one submission. Undecodable bodies and
/// invalid metrics share the 400 `ScoreResponse` shape.
pub(crate) fn score_submission<F>(
    payload: Result<Json<MetricsSubmission>, JsonRejection>,
    evaluator: F,
) -> Response
where
    F: Fn(&SleepMetrics) -> ScoreResult,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(%rejection, "rejected undecodable sleep metrics payload");
            let payload = ScoreResponse::rejected(rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };
    info!(?submission, "received sleep metrics for scoring");

    let metrics = match submission.validate() {
        Ok(metrics) => metrics,
        Err(error) => {
            warn!(%error, "rejected sleep metrics");
            let payload = ScoreResponse::rejected(error.to_string());
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match panic::catch_unwind(AssertUnwindSafe(|| evaluator(&metrics))) {
        Ok(result) => {
            info!(
                score = result.score,
                bio_age_delta = %result.bio_age_delta,
                alerts = result.alerts.len(),
                suggestions = result.suggestions.len(),
                "calculated sleep score"
            );
            (StatusCode::OK, Json(ScoreResponse::from(result))).into_response()
        }
        Err(_) => {
            error!(?metrics, "sleep score evaluation panicked");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ScoreResponse::internal_error()),
            )
                .into_response()
        }
    }
}
