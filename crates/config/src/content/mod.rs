//! Reference Data
//!
//! The static tables the responder answers from. They are read once at
//! process start and shared read-only afterwards; nothing mutates them while
//! requests are served.
//!
//! Each table lives in its own YAML file under a content directory. A copy of
//! the repository's config/content/ is compiled into the binary and used when
//! no directory is configured.

mod aliases;
mod diseases;
mod intents;
mod keywords;
mod phrases;
mod vaccines;
mod validator;

pub use aliases::AliasesConfig;
pub use diseases::DiseasesConfig;
pub use intents::IntentsConfig;
pub use keywords::{EmergencyTrigger, KeywordGroup, KeywordsConfig};
pub use phrases::PhrasesConfig;
pub use vaccines::{VaccineEntry, VaccinesConfig};
pub use validator::{
    ReferenceValidator, ValidationCategory, ValidationIssue, ValidationResult, ValidationSeverity,
};

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::ConfigError;

const DISEASES_FILE: &str = "diseases.yaml";
const VACCINES_FILE: &str = "vaccines.yaml";
const PHRASES_FILE: &str = "phrases.yaml";
const ALIASES_FILE: &str = "aliases.yaml";
const KEYWORDS_FILE: &str = "keywords.yaml";
const INTENTS_FILE: &str = "intents.yaml";

const EMBEDDED_DISEASES: &str = include_str!("../../../../config/content/diseases.yaml");
const EMBEDDED_VACCINES: &str = include_str!("../../../../config/content/vaccines.yaml");
const EMBEDDED_PHRASES: &str = include_str!("../../../../config/content/phrases.yaml");
const EMBEDDED_ALIASES: &str = include_str!("../../../../config/content/aliases.yaml");
const EMBEDDED_KEYWORDS: &str = include_str!("../../../../config/content/keywords.yaml");
const EMBEDDED_INTENTS: &str = include_str!("../../../../config/content/intents.yaml");

/// Errors when loading a reference table
#[derive(Debug)]
pub enum ContentError {
    FileNotFound(String, String),
    ParseError(String, String),
    Invalid(Vec<String>),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path, err) => {
                write!(f, "Reference data not found at {}: {}", path, err)
            }
            Self::ParseError(source, err) => {
                write!(f, "Failed to parse reference data {}: {}", source, err)
            }
            Self::Invalid(issues) => {
                write!(f, "Reference data failed validation: {}", issues.join("; "))
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Read and parse one YAML table
pub(crate) fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ContentError::FileNotFound(path.display().to_string(), e.to_string())
    })?;
    parse_yaml(&path.display().to_string(), &content)
}

pub(crate) fn parse_yaml<T: DeserializeOwned>(source: &str, content: &str) -> Result<T, ContentError> {
    serde_yaml::from_str(content).map_err(|e| ContentError::ParseError(source.to_string(), e.to_string()))
}

/// All reference tables, loaded together
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub diseases: DiseasesConfig,
    pub vaccines: VaccinesConfig,
    pub phrases: PhrasesConfig,
    pub aliases: AliasesConfig,
    pub keywords: KeywordsConfig,
    pub intents: IntentsConfig,
}

impl ReferenceData {
    /// Load every table from a content directory
    ///
    /// All six files are required. Validation errors fail the load;
    /// validation warnings are logged and tolerated.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ConfigError::FileNotFound(dir.display().to_string()));
        }

        let data = Self {
            diseases: load_yaml(&dir.join(DISEASES_FILE))?,
            vaccines: load_yaml(&dir.join(VACCINES_FILE))?,
            phrases: load_yaml(&dir.join(PHRASES_FILE))?,
            aliases: load_yaml(&dir.join(ALIASES_FILE))?,
            keywords: load_yaml(&dir.join(KEYWORDS_FILE))?,
            intents: load_yaml(&dir.join(INTENTS_FILE))?,
        };

        tracing::info!(
            dir = %dir.display(),
            diseases = data.diseases.len(),
            vaccines = data.vaccines.len(),
            "Loaded reference data"
        );

        data.checked(false)
    }

    /// Parse the tables compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        let data = Self {
            diseases: parse_yaml(DISEASES_FILE, EMBEDDED_DISEASES)?,
            vaccines: parse_yaml(VACCINES_FILE, EMBEDDED_VACCINES)?,
            phrases: parse_yaml(PHRASES_FILE, EMBEDDED_PHRASES)?,
            aliases: parse_yaml(ALIASES_FILE, EMBEDDED_ALIASES)?,
            keywords: parse_yaml(KEYWORDS_FILE, EMBEDDED_KEYWORDS)?,
            intents: parse_yaml(INTENTS_FILE, EMBEDDED_INTENTS)?,
        };

        tracing::debug!(
            diseases = data.diseases.len(),
            vaccines = data.vaccines.len(),
            "Parsed embedded reference data"
        );

        data.checked(false)
    }

    /// Load from a directory if given, otherwise the embedded copy
    ///
    /// With `strict`, validation warnings are promoted to errors.
    pub fn from_settings(dir: Option<&Path>, strict: bool) -> Result<Self, ConfigError> {
        let data = match dir {
            Some(dir) => Self::load(dir)?,
            None => Self::embedded()?,
        };
        if strict {
            data.checked(true)
        } else {
            Ok(data)
        }
    }

    fn checked(self, strict: bool) -> Result<Self, ConfigError> {
        let result = ReferenceValidator::new().validate(&self);
        for issue in result.warnings() {
            tracing::warn!(category = %issue.category, "{}", issue.message);
        }

        let failing: Vec<String> = result
            .issues
            .iter()
            .filter(|i| strict || i.severity == ValidationSeverity::Error)
            .map(|i| i.message.clone())
            .collect();

        if failing.is_empty() {
            Ok(self)
        } else {
            Err(ContentError::Invalid(failing).into())
        }
    }

    /// Disease topics with an information entry
    pub fn available_diseases(&self) -> Vec<&str> {
        self.diseases.topics()
    }

    /// Vaccine topics with an information card (the schedule is not one)
    pub fn available_vaccines(&self) -> Vec<&str> {
        self.vaccines.topics()
    }
}
