use crate::infra::AppState;
use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use shield_sleep::error::AppError;
use shield_sleep::scoring::sleep_router;
use tracing::info;

const UPLOAD_FIELD: &str = "file";

/// Acknowledgement for a simulated lab-report upload.
#[derive(Debug, Serialize)]
pub(crate) struct LabUploadReceipt {
    pub(crate) message: String,
    pub(crate) file_name: String,
    pub(crate) content_type: String,
    pub(crate) bytes: usize,
    pub(crate) received_at: DateTime<Utc>,
}

pub(crate) fn with_service_routes() -> axum::Router {
    sleep_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/sleep/lab/upload",
            axum::routing::post(lab_upload_endpoint),
        )
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

/// Accepts a lab report and pretends to process it. Nothing is stored.
pub(crate) async fn lab_upload_endpoint(
    Extension(state): Extension<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let bytes = field.bytes().await?;
        upload = Some((file_name, bytes.len()));
        break;
    }

    let Some((file_name, bytes)) = upload.filter(|(_, bytes)| *bytes > 0) else {
        let payload = json!({ "message": "No file selected for upload." });
        return Ok((StatusCode::BAD_REQUEST, Json(payload)).into_response());
    };

    info!(%file_name, bytes, "received simulated lab report upload");
    tokio::time::sleep(state.upload.simulated_delay).await;

    let content_type = mime_guess::from_path(&file_name)
        .first_or_octet_stream()
        .to_string();
    info!(%file_name, %content_type, "simulated processing of lab report");

    let receipt = LabUploadReceipt {
        message: format!("Lab report '{file_name}' received for simulated processing."),
        file_name,
        content_type,
        bytes,
        received_at: Utc::now(),
    };
    Ok((StatusCode::OK, Json(receipt)).into_response())
}
