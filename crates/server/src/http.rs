//! HTTP Endpoints
//!
//! Service status, health, metrics, the webhook and a manual test endpoint.

use std::time::Duration;

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use health_agent_agent::HealthRequest;
use health_agent_core::{Language, Parameters};

use crate::metrics::{metrics_handler, record_error, record_request};
use crate::state::AppState;
use crate::webhook::webhook;

/// Words that make the test endpoint simulate a fever question
const TEST_FEVER_WORDS: &[&str] = &["fever", "ଜ୍ୱର", "बुखार"];
/// Words that make the test endpoint simulate a vaccine question
const TEST_VACCINE_WORDS: &[&str] = &["vaccine", "ଟିକା", "टीका"];
/// Intent name for test queries matching neither list
const TEST_INTENT: &str = "test";

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.get_config().server;
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);
    let timeout = Duration::from_secs(server.timeout_seconds.max(1));

    Router::new()
        .route("/", get(status))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/webhook", post(webhook))
        .route("/test", post(test_query))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

fn localhost() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Build CORS layer from configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return localhost();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return localhost();
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    pub supported_languages: Vec<String>,
    pub supported_diseases: Vec<String>,
    pub supported_vaccines: Vec<String>,
}

/// GET /
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    record_request("status");
    Json(StatusResponse {
        status: "healthy".to_string(),
        message: "Health responder API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_languages: Language::all()
            .iter()
            .map(|l| l.as_str().to_string())
            .collect(),
        supported_diseases: state.catalogue.diseases.clone(),
        supported_vaccines: state.catalogue.vaccines.clone(),
    })
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let ready = !state.catalogue.diseases.is_empty();
    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        code,
        Json(serde_json::json!({
            "status": if ready { "ok" } else { "degraded" },
            "responder": state.responder.name(),
            "diseases": state.catalogue.diseases.len(),
            "vaccines": state.catalogue.vaccines.len(),
        })),
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct TestQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub query: String,
    pub language: Language,
    pub intent: String,
    pub response: String,
}

/// Stand-in for the upstream classifier: fever words, then vaccine words
fn simulate_classification(query: &str) -> (&'static str, Parameters) {
    let lower = query.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if mentions(TEST_FEVER_WORDS) {
        ("disease_info", Parameters::new().with("disease", "fever"))
    } else if mentions(TEST_VACCINE_WORDS) {
        ("vaccine_info", Parameters::new())
    } else {
        (TEST_INTENT, Parameters::new())
    }
}

/// POST /test
async fn test_query(
    State(state): State<AppState>,
    Json(query): Json<TestQuery>,
) -> (StatusCode, Json<TestResult>) {
    record_request("test");

    let language = query
        .language
        .as_deref()
        .map(Language::from_str_or_default)
        .unwrap_or_default();
    let (intent, parameters) = simulate_classification(&query.query);
    tracing::debug!(intent, language = %language, "Simulated classification");

    let request = HealthRequest::new(intent, query.query.clone())
        .with_parameters(parameters)
        .with_language(language);

    let (code, response) = match state.responder.respond(&request) {
        Ok(response) => (StatusCode::OK, response.text),
        Err(e) => {
            tracing::error!(error = %e, "Responder failed on test query");
            record_error("responder");
            (StatusCode::INTERNAL_SERVER_ERROR, state.error_text.to_string())
        }
    };

    (
        code,
        Json(TestResult {
            query: query.query,
            language,
            intent: intent.to_string(),
            response,
        }),
    )
}
