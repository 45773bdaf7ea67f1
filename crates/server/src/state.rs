//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use health_agent_agent::{HealthAgent, Responder};
use health_agent_config::Settings;
use health_agent_core::Language;

/// What the service can answer about, captured at startup
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub diseases: Vec<String>,
    pub vaccines: Vec<String>,
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub responder: Arc<dyn Responder>,
    pub catalogue: Arc<Catalogue>,
    /// Reply used when the responder fails
    pub error_text: Arc<str>,
}

impl AppState {
    /// State around a loaded health agent
    pub fn new(config: Settings, agent: HealthAgent) -> Self {
        let data = agent.data();
        let catalogue = Catalogue {
            diseases: data.available_diseases().into_iter().map(String::from).collect(),
            vaccines: data.available_vaccines().into_iter().map(String::from).collect(),
        };
        let error_text: Arc<str> = Arc::from(agent.error_message(Language::English));

        Self {
            config: Arc::new(config),
            responder: Arc::new(agent),
            catalogue: Arc::new(catalogue),
            error_text,
        }
    }

    /// Swap the responder, keeping everything else
    pub fn with_responder(mut self, responder: Arc<dyn Responder>) -> Self {
        self.responder = responder;
        self
    }

    pub fn get_config(&self) -> &Settings {
        &self.config
    }
}
