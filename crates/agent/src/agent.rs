//! Health agent facade
//!
//! Owns the shared reference data and the router, and resolves the response
//! language before routing.

use std::path::Path;
use std::sync::Arc;

use health_agent_config::{ConfigError, ReferenceData, Settings};
use health_agent_core::{IntentKind, Language, Parameters, Result};
use health_agent_text_processing::LanguageDetector;
use serde::{Deserialize, Serialize};

use crate::router::IntentRouter;
use crate::traits::Responder;

/// Name of the upstream parameter that can pin the response language
pub const LANGUAGE_PARAMETER: &str = "language";

/// One classified user utterance
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthRequest {
    /// Intent name as sent by the upstream classifier
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub parameters: Parameters,
    /// Raw user text
    #[serde(default)]
    pub text: String,
    /// Language already known to the caller; detection is skipped when set
    #[serde(default)]
    pub language: Option<Language>,
}

impl HealthRequest {
    pub fn new(intent: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Response text plus what the agent decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub text: String,
    pub language: Language,
    pub intent: IntentKind,
}

/// Rule-based multilingual health responder
pub struct HealthAgent {
    data: Arc<ReferenceData>,
    detector: LanguageDetector,
    router: IntentRouter,
}

impl HealthAgent {
    pub fn new(data: ReferenceData) -> Self {
        let data = Arc::new(data);
        Self {
            router: IntentRouter::new(data.clone()),
            detector: LanguageDetector::new(),
            data,
        }
    }

    /// Agent over the reference data compiled into the binary
    pub fn embedded() -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(ReferenceData::embedded()?))
    }

    /// Agent over the reference data named by settings
    pub fn from_settings(settings: &Settings) -> std::result::Result<Self, ConfigError> {
        let dir: Option<&Path> = settings.content.data_dir.as_deref();
        let strict = settings.content.strict || settings.environment.is_strict();
        Ok(Self::new(ReferenceData::from_settings(dir, strict)?))
    }

    /// Response language for a request
    ///
    /// The caller's hint wins, else the text is detected. A `language`
    /// parameter then overrides when it names Hindi or Odia.
    pub fn resolve_language(&self, request: &HealthRequest) -> Language {
        let detected = request
            .language
            .unwrap_or_else(|| self.detector.detect(&request.text));

        match request
            .parameters
            .text(LANGUAGE_PARAMETER)
            .map(|p| Language::from_str_or_default(&p))
        {
            Some(lang) if lang != Language::English => lang,
            _ => detected,
        }
    }

    /// Route a request and build the response
    pub fn handle(&self, request: &HealthRequest) -> HealthResponse {
        let language = self.resolve_language(request);
        let intent = self.router.classify(&request.intent);
        let text = self
            .router
            .route(&request.intent, &request.parameters, &request.text, language);

        tracing::debug!(
            intent = %intent,
            language = %language,
            chars = text.chars().count(),
            "Built response"
        );

        HealthResponse {
            text,
            language,
            intent,
        }
    }

    /// Generic "something went wrong" text
    pub fn error_message(&self, language: Language) -> &str {
        self.data.phrases.error.get(language)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn router(&self) -> &IntentRouter {
        &self.router
    }
}

impl Responder for HealthAgent {
    fn respond(&self, request: &HealthRequest) -> Result<HealthResponse> {
        Ok(self.handle(request))
    }

    fn name(&self) -> &str {
        "health-agent"
    }
}
