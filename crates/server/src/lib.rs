//! Health Agent Server
//!
//! Provides the chat-platform webhook and HTTP endpoints for the health agent.

pub mod http;
pub mod metrics;
pub mod state;
pub mod webhook;

pub use http::create_router;
pub use metrics::{init_metrics, record_error, record_request, record_response};
pub use state::AppState;
pub use webhook::{WebhookRequest, WebhookResponse};

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Metrics error: {0}")]
    Metrics(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServerError> for axum::http::StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            ServerError::Metrics(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<health_agent_core::Error> for ServerError {
    fn from(err: health_agent_core::Error) -> Self {
        match err {
            health_agent_core::Error::InvalidRequest(msg) => ServerError::InvalidRequest(msg),
            health_agent_core::Error::Serialization(e) => ServerError::InvalidRequest(e.to_string()),
            other => ServerError::Internal(other.to_string()),
        }
    }
}
