//! Reference Data Validator
//!
//! Validates the reference tables at startup to catch data-quality problems
//! early:
//! - Required entries (disease table, schedule, medical disclaimer)
//! - Missing language variants
//! - Cross-references (aliases, keywords and triggers point at real entries)
//! - Duplicate aliases and intent names
//!
//! Errors prevent startup. Warnings are logged; a topic missing a language
//! still answers in English.

use health_agent_core::emergency::FEVER_ABOVE_103;
use health_agent_core::{Domain, IntentKind, Language, Topic};

use super::phrases::MEDICAL_ADVICE;
use super::ReferenceData;

/// A single validation finding
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub category: ValidationCategory,
    /// Table the issue was found in
    pub source: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:?}] {} ({}): {}",
            self.severity, self.source, self.category, self.message
        )
    }
}

/// Category of validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    /// Missing required entry
    MissingRequired,
    /// Entry lacks one or more language variants
    MissingLanguage,
    /// Reference to a topic or condition that does not exist
    InvalidReference,
    /// Same alias or name defined twice
    Duplicate,
}

impl std::fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::MissingRequired => "missing_required",
            Self::MissingLanguage => "missing_language",
            Self::InvalidReference => "invalid_reference",
            Self::Duplicate => "duplicate",
        };
        f.write_str(name)
    }
}

/// Severity of validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Logged, startup continues
    Warning,
    /// Prevents startup
    Error,
}

/// Validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn push(
        &mut self,
        category: ValidationCategory,
        severity: ValidationSeverity,
        source: &str,
        message: String,
    ) {
        self.issues.push(ValidationIssue {
            category,
            source: source.to_string(),
            message,
            severity,
        });
    }

    fn add_error(&mut self, source: &str, message: String) {
        self.push(
            ValidationCategory::MissingRequired,
            ValidationSeverity::Error,
            source,
            message,
        );
    }

    fn add_warning(&mut self, category: ValidationCategory, source: &str, message: String) {
        self.push(category, ValidationSeverity::Warning, source, message);
    }

    /// Check if validation passed (no errors)
    pub fn is_ok(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
    }
}

/// Validates a full set of reference tables
#[derive(Debug, Default)]
pub struct ReferenceValidator;

impl ReferenceValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, data: &ReferenceData) -> ValidationResult {
        let mut result = ValidationResult::default();
        self.check_required(data, &mut result);
        self.check_languages(data, &mut result);
        self.check_references(data, &mut result);
        self.check_duplicates(data, &mut result);
        result
    }

    fn check_required(&self, data: &ReferenceData, result: &mut ValidationResult) {
        if data.diseases.is_empty() {
            result.add_error("diseases", "Disease table is empty".to_string());
        }
        if data.vaccines.complete_schedule.english.trim().is_empty() {
            result.add_error("vaccines", "Complete schedule has no English text".to_string());
        }
        if !data.phrases.disclaimers.contains_key(MEDICAL_ADVICE) {
            result.add_error(
                "phrases",
                format!("Disclaimer '{}' is not defined", MEDICAL_ADVICE),
            );
        }
    }

    fn check_languages(&self, data: &ReferenceData, result: &mut ValidationResult) {
        for (topic, text) in &data.diseases.diseases {
            warn_missing(result, "diseases", topic, &text.missing_languages());
        }
        for (topic, entry) in &data.vaccines.vaccines {
            warn_missing(result, "vaccines", topic, &entry.missing_languages());
        }
        warn_missing(
            result,
            "vaccines",
            "complete_schedule",
            &data.vaccines.complete_schedule.missing_languages(),
        );
        for (name, text) in data.phrases.named_texts() {
            warn_missing(result, "phrases", &name, &text.missing_languages());
        }
    }

    fn check_references(&self, data: &ReferenceData, result: &mut ValidationResult) {
        for topic in data.aliases.topics(Domain::Disease) {
            if !data.diseases.contains(topic) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "aliases",
                    format!("Disease aliases point at '{}' which has no entry", topic),
                );
            }
        }
        for topic in data.aliases.topics(Domain::Vaccine) {
            if topic != Topic::COMPLETE_SCHEDULE && !data.vaccines.contains(topic) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "aliases",
                    format!("Vaccine aliases point at '{}' which has no entry", topic),
                );
            }
        }
        for group in &data.keywords.disease_keywords {
            if !data.diseases.contains(&group.topic) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "keywords",
                    format!("Disease keywords point at '{}' which has no entry", group.topic),
                );
            }
        }
        for trigger in &data.keywords.emergency_triggers {
            if !data.phrases.emergency_responses.contains_key(&trigger.condition) {
                result.add_warning(
                    ValidationCategory::InvalidReference,
                    "keywords",
                    format!(
                        "Emergency trigger '{}' has no emergency response",
                        trigger.condition
                    ),
                );
            }
        }
        if !data.phrases.emergency_responses.contains_key(FEVER_ABOVE_103) {
            result.add_warning(
                ValidationCategory::InvalidReference,
                "phrases",
                format!("Emergency response '{}' is not defined", FEVER_ABOVE_103),
            );
        }
        for kind in IntentKind::routable() {
            if data.intents.names(*kind).is_empty() {
                result.add_warning(
                    ValidationCategory::MissingRequired,
                    "intents",
                    format!("Intent kind '{}' has no upstream names", kind),
                );
            }
        }
    }

    fn check_duplicates(&self, data: &ReferenceData, result: &mut ValidationResult) {
        for domain in [Domain::Disease, Domain::Vaccine] {
            for (alias, topics) in data.aliases.conflicts(domain) {
                result.add_warning(
                    ValidationCategory::Duplicate,
                    "aliases",
                    format!(
                        "{} alias '{}' is claimed by {}",
                        domain,
                        alias,
                        topics.join(", ")
                    ),
                );
            }
        }
        for name in data.intents.ambiguous_names() {
            result.add_warning(
                ValidationCategory::Duplicate,
                "intents",
                format!("Intent name '{}' is listed under several kinds", name),
            );
        }
    }
}

fn warn_missing(result: &mut ValidationResult, source: &str, key: &str, missing: &[Language]) {
    if missing.is_empty() {
        return;
    }
    let langs: Vec<&str> = missing.iter().map(|l| l.as_str()).collect();
    result.add_warning(
        ValidationCategory::MissingLanguage,
        source,
        format!("'{}' has no {} text, English will be used", key, langs.join("/")),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_agent_core::LocalizedText;

    fn data() -> ReferenceData {
        ReferenceData::embedded().unwrap()
    }

    #[test]
    fn test_embedded_data_is_clean() {
        let result = ReferenceValidator::new().validate(&data());
        assert!(result.is_ok());
        assert_eq!(result.warnings().count(), 0, "{:?}", result.issues);
    }

    #[test]
    fn test_missing_language_is_warning() {
        let mut data = data();
        data.diseases
            .diseases
            .insert("plague".to_string(), LocalizedText::new("Plague info"));

        let result = ReferenceValidator::new().validate(&data);
        assert!(result.is_ok());
        let warning = result.warnings().next().unwrap();
        assert_eq!(warning.category, ValidationCategory::MissingLanguage);
        assert!(warning.message.contains("plague"));
        assert!(warning.message.contains("hindi/odia"));
    }

    #[test]
    fn test_dangling_alias_is_warning() {
        let mut data = data();
        data.aliases
            .diseases
            .insert("rabies".to_string(), vec!["rabies".to_string()]);

        let result = ReferenceValidator::new().validate(&data);
        assert!(result
            .warnings()
            .any(|w| w.category == ValidationCategory::InvalidReference
                && w.message.contains("rabies")));
    }

    #[test]
    fn test_missing_disclaimer_is_error() {
        let mut data = data();
        data.phrases.disclaimers.clear();

        let result = ReferenceValidator::new().validate(&data);
        assert!(!result.is_ok());
        assert_eq!(result.errors().count(), 1);
    }

    #[test]
    fn test_empty_disease_table_is_error() {
        let mut data = data();
        data.diseases.diseases.clear();

        let result = ReferenceValidator::new().validate(&data);
        assert!(!result.is_ok());
    }
}
