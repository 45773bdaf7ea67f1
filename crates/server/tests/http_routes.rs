//! Router tests driven through `tower::ServiceExt::oneshot`

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use health_agent_agent::{HealthAgent, HealthRequest, HealthResponse, Responder};
use health_agent_config::Settings;
use health_agent_core::{Error, Language};
use health_agent_server::{create_router, AppState, WebhookResponse};

fn state() -> AppState {
    let agent = HealthAgent::embedded().expect("embedded reference data");
    AppState::new(Settings::default(), agent)
}

fn app() -> Router {
    create_router(state())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn fulfillment(app: Router, body: &str) -> String {
    let response = app.oneshot(post_json("/webhook", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reply: WebhookResponse = serde_json::from_value(json).unwrap();
    reply.fulfillment_text
}

#[tokio::test]
async fn test_status_lists_catalogue() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(
        json["supported_languages"],
        serde_json::json!(["english", "hindi", "odia"])
    );
    let diseases = json["supported_diseases"].as_array().unwrap();
    assert!(diseases.iter().any(|d| d == "fever"));
    let vaccines = json["supported_vaccines"].as_array().unwrap();
    assert!(vaccines.iter().any(|v| v == "bcg"));
    assert!(!vaccines.iter().any(|v| v == "complete"));
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["responder"], "health-agent");
}

#[tokio::test]
async fn test_webhook_disease_in_odia_by_parameter() {
    let agent = HealthAgent::embedded().unwrap();
    let body = r#"{
        "queryResult": {
            "intent": {"displayName": "disease_info"},
            "parameters": {"disease": "malaria", "language": "odia"},
            "queryText": "tell me about malaria"
        }
    }"#;
    let text = fulfillment(app(), body).await;
    assert!(text.starts_with(agent.data().diseases.info("malaria", Language::Odia).unwrap()));
    assert!(text.ends_with(agent.data().phrases.medical_disclaimer(Language::Odia)));
}

#[tokio::test]
async fn test_webhook_detects_hindi() {
    let agent = HealthAgent::embedded().unwrap();
    let body = r#"{
        "queryResult": {
            "intent": {"displayName": "Default Welcome Intent"},
            "parameters": {},
            "queryText": "नमस्ते"
        }
    }"#;
    let text = fulfillment(app(), body).await;
    assert_eq!(text, agent.data().phrases.greeting.get(Language::Hindi));
}

#[tokio::test]
async fn test_webhook_invalid_request() {
    assert_eq!(fulfillment(app(), "").await, "Invalid request");
    assert_eq!(fulfillment(app(), "{}").await, "Invalid request");
    assert_eq!(fulfillment(app(), "not json").await, "Invalid request");
}

struct Broken;

impl Responder for Broken {
    fn respond(&self, _request: &HealthRequest) -> health_agent_core::Result<HealthResponse> {
        Err(Error::ReferenceData("tables dropped".to_string()))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[tokio::test]
async fn test_webhook_failure_gives_error_text() {
    let agent = HealthAgent::embedded().unwrap();
    let expected = agent.error_message(Language::English).to_string();
    let app = create_router(state().with_responder(Arc::new(Broken)));

    let body = r#"{"queryResult": {"intent": {"displayName": "welcome"}, "queryText": "hi"}}"#;
    assert_eq!(fulfillment(app, body).await, expected);
}

#[tokio::test]
async fn test_test_endpoint_fever() {
    let agent = HealthAgent::embedded().unwrap();
    let response = app()
        .oneshot(post_json(
            "/test",
            r#"{"query": "ମୋର ଜ୍ୱର", "language": "odia"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["intent"], "disease_info");
    assert_eq!(json["language"], "odia");
    let text = json["response"].as_str().unwrap();
    assert!(text.starts_with(agent.data().diseases.info("fever", Language::Odia).unwrap()));
}

#[tokio::test]
async fn test_test_endpoint_unrecognized_uses_fallback() {
    let agent = HealthAgent::embedded().unwrap();
    let response = app()
        .oneshot(post_json("/test", r#"{"query": "hello"}"#))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["intent"], "test");
    assert_eq!(json["language"], "english");
    assert_eq!(
        json["response"],
        agent.data().phrases.fallback.get(Language::English)
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let response = app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
