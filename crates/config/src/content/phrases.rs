//! Phrases Table
//!
//! Fixed sentences the responder uses around the information tables:
//! disclaimers, emergency messages, greetings and fallbacks.

use health_agent_core::{Domain, Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Phrases loaded from phrases.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhrasesConfig {
    /// Disclaimers keyed by kind; `medical_advice` is appended to every
    /// disease and vaccine response
    pub disclaimers: BTreeMap<String, LocalizedText>,
    /// Emergency messages keyed by condition (e.g. `fever_above_103`)
    pub emergency_responses: BTreeMap<String, LocalizedText>,
    /// Welcome greeting
    pub greeting: LocalizedText,
    /// General health tips
    pub health_tips: LocalizedText,
    /// "Here is what I can help with"
    pub fallback: LocalizedText,
    /// Generic "call the emergency number" message
    pub emergency_generic: LocalizedText,
    /// Asked when a disease question names no disease
    pub disease_prompt: LocalizedText,
    /// Disease topic not in the table
    pub disease_not_found: LocalizedText,
    /// Asked when a vaccine question names no vaccine
    pub vaccine_prompt: LocalizedText,
    /// Vaccine topic not in the table
    pub vaccine_not_found: LocalizedText,
    /// Generic failure message used by the webhook layer
    pub error: LocalizedText,
}

/// Key of the disclaimer appended to every topic response
pub const MEDICAL_ADVICE: &str = "medical_advice";

impl PhrasesConfig {
    /// Medical disclaimer for a language, empty if none is configured
    pub fn medical_disclaimer(&self, language: Language) -> &str {
        self.disclaimers
            .get(MEDICAL_ADVICE)
            .map(|text| text.get(language))
            .unwrap_or("")
    }

    /// Emergency message for a condition
    pub fn emergency(&self, condition: &str, language: Language) -> Option<&str> {
        self.emergency_responses
            .get(condition)
            .map(|text| text.get(language))
    }

    /// Prompt asking which topic the user means
    pub fn prompt(&self, domain: Domain) -> &LocalizedText {
        match domain {
            Domain::Disease => &self.disease_prompt,
            Domain::Vaccine => &self.vaccine_prompt,
        }
    }

    /// "Topic not found, here is what I support"
    pub fn not_found(&self, domain: Domain) -> &LocalizedText {
        match domain {
            Domain::Disease => &self.disease_not_found,
            Domain::Vaccine => &self.vaccine_not_found,
        }
    }

    /// Every single-text phrase with its name, for validation
    pub fn named_texts(&self) -> Vec<(String, &LocalizedText)> {
        let mut texts = vec![
            ("greeting".to_string(), &self.greeting),
            ("health_tips".to_string(), &self.health_tips),
            ("fallback".to_string(), &self.fallback),
            ("emergency_generic".to_string(), &self.emergency_generic),
            ("disease_prompt".to_string(), &self.disease_prompt),
            ("disease_not_found".to_string(), &self.disease_not_found),
            ("vaccine_prompt".to_string(), &self.vaccine_prompt),
            ("vaccine_not_found".to_string(), &self.vaccine_not_found),
            ("error".to_string(), &self.error),
        ];
        texts.extend(
            self.disclaimers
                .iter()
                .map(|(k, v)| (format!("disclaimers.{}", k), v)),
        );
        texts.extend(
            self.emergency_responses
                .iter()
                .map(|(k, v)| (format!("emergency_responses.{}", k), v)),
        );
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> LocalizedText {
        LocalizedText::new(s)
    }

    fn phrases() -> PhrasesConfig {
        PhrasesConfig {
            disclaimers: BTreeMap::from([(
                MEDICAL_ADVICE.to_string(),
                text("See a doctor").with_hindi("डॉक्टर से मिलें"),
            )]),
            emergency_responses: BTreeMap::from([(
                "fever_above_103".to_string(),
                text("High fever!"),
            )]),
            greeting: text("Hello"),
            health_tips: text("Drink water"),
            fallback: text("I can help"),
            emergency_generic: text("Call 108"),
            disease_prompt: text("Which disease?"),
            disease_not_found: text("Unknown disease"),
            vaccine_prompt: text("Which vaccine?"),
            vaccine_not_found: text("Unknown vaccine"),
            error: text("Something went wrong"),
        }
    }

    #[test]
    fn test_medical_disclaimer() {
        let p = phrases();
        assert_eq!(p.medical_disclaimer(Language::Hindi), "डॉक्टर से मिलें");
        assert_eq!(p.medical_disclaimer(Language::Odia), "See a doctor");
    }

    #[test]
    fn test_domain_specific_phrases() {
        let p = phrases();
        assert_eq!(p.prompt(Domain::Vaccine).get(Language::English), "Which vaccine?");
        assert_eq!(p.not_found(Domain::Disease).get(Language::English), "Unknown disease");
        assert_eq!(p.emergency("fever_above_103", Language::Hindi), Some("High fever!"));
        assert_eq!(p.emergency("broken_leg", Language::Hindi), None);
    }

    #[test]
    fn test_named_texts_cover_maps() {
        let names: Vec<String> = phrases().named_texts().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&"disclaimers.medical_advice".to_string()));
        assert!(names.contains(&"emergency_responses.fever_above_103".to_string()));
        assert_eq!(names.len(), 11);
    }
}
