//! Configuration management for the health responder
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (HEALTH_AGENT_ prefix)
//!
//! # Reference Data
//!
//! Everything the responder says lives in config/content/:
//! - diseases.yaml - Disease information per language
//! - vaccines.yaml - Vaccine cards and the complete schedule
//! - phrases.yaml - Disclaimers, emergency messages, greetings, fallbacks
//! - aliases.yaml - Free-form names mapped to canonical topics
//! - keywords.yaml - Keyword lists used by the router and emergency checks
//! - intents.yaml - Upstream intent names mapped to intent kinds
//!
//! Access via [`ReferenceData`], loaded once at startup.

pub mod content;
pub mod settings;

pub use content::{
    AliasesConfig, ContentError, DiseasesConfig, EmergencyTrigger, IntentsConfig, KeywordGroup,
    KeywordsConfig, PhrasesConfig, ReferenceData, ReferenceValidator, ValidationCategory,
    ValidationIssue, ValidationResult, ValidationSeverity, VaccineEntry, VaccinesConfig,
};
pub use settings::{
    load_settings, ContentSettings, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ContentError> for ConfigError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::FileNotFound(path, _) => ConfigError::FileNotFound(path),
            ContentError::ParseError(path, message) => {
                ConfigError::ParseError(format!("{}: {}", path, message))
            }
            ContentError::Invalid(issues) => ConfigError::InvalidValue {
                field: "reference data".to_string(),
                message: issues.join("; "),
            },
        }
    }
}
