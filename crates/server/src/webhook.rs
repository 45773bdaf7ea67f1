//! Chat-platform webhook
//!
//! Dialogflow-style fulfillment: the platform classifies the intent and
//! extracts parameters, this endpoint answers with the response text.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use health_agent_agent::HealthRequest;
use health_agent_core::{Error, Parameters};

use crate::metrics::{record_error, record_request, record_response};
use crate::state::AppState;

/// Reply to a missing or empty payload
pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub intent: Option<IntentInfo>,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub query_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

impl WebhookResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }
}

impl WebhookRequest {
    /// Parse a raw body; empty, `null` and `{}` bodies are invalid
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::InvalidRequest("empty body".to_string()));
        }

        let value: serde_json::Value = serde_json::from_slice(body)?;
        let is_empty = value.is_null() || value.as_object().is_some_and(|o| o.is_empty());
        if is_empty {
            return Err(Error::InvalidRequest("empty payload".to_string()));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// The agent request; language is left to detection
    pub fn into_health_request(self) -> HealthRequest {
        let query = self.query_result.unwrap_or_default();
        let intent = query
            .intent
            .and_then(|i| i.display_name)
            .unwrap_or_default();

        HealthRequest::new(intent, query.query_text.unwrap_or_default())
            .with_parameters(query.parameters)
    }
}

/// POST /webhook
pub async fn webhook(State(state): State<AppState>, body: Bytes) -> Json<WebhookResponse> {
    record_request("webhook");

    let request = match WebhookRequest::parse(&body) {
        Ok(request) => request.into_health_request(),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected webhook payload");
            record_error("invalid_request");
            return Json(WebhookResponse::new(INVALID_REQUEST));
        }
    };

    tracing::info!(
        intent = %request.intent,
        parameters = request.parameters.len(),
        query_chars = request.text.chars().count(),
        "Webhook request"
    );
    tracing::debug!(query = %request.text, "Webhook query text");

    match state.responder.respond(&request) {
        Ok(response) => {
            tracing::info!(
                kind = %response.intent,
                language = %response.language,
                "Webhook response"
            );
            record_response(response.intent.as_str(), response.language.as_str());
            Json(WebhookResponse::new(response.text))
        }
        Err(e) => {
            tracing::error!(error = %e, responder = state.responder.name(), "Responder failed");
            record_error("responder");
            Json(WebhookResponse::new(&*state.error_text))
        }
    }
}
