//! Observability Metrics
//!
//! Prometheus metrics endpoint for monitoring.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

use crate::ServerError;

/// Global Prometheus handle
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder
///
/// Call once at startup. A second call returns the existing handle.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;

    register_default_metrics();

    Ok(METRICS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the global metrics handle
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

fn register_default_metrics() {
    for endpoint in ["webhook", "test", "status"] {
        counter!("health_agent_requests_total", "endpoint" => endpoint).absolute(0);
    }
    counter!("health_agent_errors_total", "type" => "invalid_request").absolute(0);
    counter!("health_agent_errors_total", "type" => "responder").absolute(0);
}

/// Record request to endpoint
pub fn record_request(endpoint: &'static str) {
    counter!("health_agent_requests_total", "endpoint" => endpoint).increment(1);
}

/// Record a produced response by intent kind and language
pub fn record_response(intent: &'static str, language: &'static str) {
    counter!(
        "health_agent_responses_total",
        "intent" => intent,
        "language" => language
    )
    .increment(1);
}

/// Record error by type
pub fn record_error(error_type: &'static str) {
    counter!("health_agent_errors_total", "type" => error_type).increment(1);
}

/// Metrics endpoint handler
///
/// Returns Prometheus-formatted metrics.
pub async fn metrics_handler() -> impl IntoResponse {
    match get_metrics_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "Metrics not initialized".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_helpers() {
        // No recorder installed: these are no-ops and must not panic
        record_request("webhook");
        record_response("welcome", "english");
        record_error("responder");
    }
}
