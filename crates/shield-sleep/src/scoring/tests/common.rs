use axum::response::Response;
use serde_json::Value;

use crate::scoring::{MetricsSubmission, SleepMetrics};

pub(super) fn metrics(hours: f64, efficiency: f64, rem: f64, age: u8, sex: &str) -> SleepMetrics {
    SleepMetrics {
        total_sleep_hours: hours,
        sleep_efficiency_percent: efficiency,
        rem_percent: rem,
        age,
        sex: sex.to_string(),
    }
}

pub(super) fn healthy_metrics() -> SleepMetrics {
    metrics(7.5, 92.0, 22.0, 34, "Male")
}

pub(super) fn submission() -> MetricsSubmission {
    MetricsSubmission::from(healthy_metrics())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
