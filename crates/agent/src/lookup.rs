//! Content Lookup
//!
//! Turns a canonical topic and a language into the final response text.
//! Every disease and vaccine answer ends with the medical disclaimer;
//! disease answers are preceded by any emergency advisories the raw text
//! triggers.

use std::sync::Arc;

use health_agent_config::ReferenceData;
use health_agent_core::{Domain, Language, Topic};
use health_agent_text_processing::EmergencyDetector;

const SEPARATOR: &str = "\n\n";

/// Read-only view over the reference tables
#[derive(Debug, Clone)]
pub struct ContentLookup {
    data: Arc<ReferenceData>,
    emergency: EmergencyDetector,
}

impl ContentLookup {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        let emergency = EmergencyDetector::new(data.keywords.emergency_groups());
        Self { data, emergency }
    }

    /// Response for a topic in a domain
    ///
    /// - no topic: the domain's "which one?" prompt
    /// - known topic: the stored entry (English if the language is missing)
    /// - unknown topic: the domain's "not found" message
    /// - vaccine `complete`: the full schedule
    pub fn lookup(
        &self,
        topic: Option<&Topic>,
        language: Language,
        raw_text: &str,
        domain: Domain,
    ) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        match (domain, topic) {
            (_, None) => {
                parts.push(self.data.phrases.prompt(domain).get(language).to_string());
            }
            (Domain::Disease, Some(topic)) => {
                parts.extend(
                    self.emergency_messages(raw_text, language)
                        .into_iter()
                        .map(str::to_string),
                );
                parts.push(self.disease_text(topic, language));
            }
            (Domain::Vaccine, Some(topic)) => {
                parts.push(self.vaccine_text(topic, language));
            }
        }

        parts.push(self.data.phrases.medical_disclaimer(language).to_string());
        parts.retain(|p| !p.is_empty());
        parts.join(SEPARATOR)
    }

    fn disease_text(&self, topic: &Topic, language: Language) -> String {
        match self.data.diseases.info(topic.as_str(), language) {
            Some(info) => info.to_string(),
            None => {
                tracing::debug!(topic = %topic, "Disease not in table");
                self.data
                    .phrases
                    .not_found(Domain::Disease)
                    .get(language)
                    .to_string()
            }
        }
    }

    fn vaccine_text(&self, topic: &Topic, language: Language) -> String {
        if topic.is_complete_schedule() {
            return self.data.vaccines.schedule(language).to_string();
        }
        self.data
            .vaccines
            .info(topic.as_str(), language)
            .unwrap_or_else(|| {
                tracing::debug!(topic = %topic, "Vaccine not in table");
                self.data
                    .phrases
                    .not_found(Domain::Vaccine)
                    .get(language)
                    .to_string()
            })
    }

    /// Emergency advisories fired by the text, in detection order
    pub fn emergency_messages(&self, raw_text: &str, language: Language) -> Vec<&str> {
        self.emergency
            .check(raw_text)
            .into_iter()
            .filter_map(|condition| self.data.phrases.emergency(condition, language))
            .collect()
    }

    /// Response to an explicit emergency request: the fired advisories, or
    /// the generic "call the emergency number" message
    pub fn emergency_response(&self, raw_text: &str, language: Language) -> String {
        let messages = self.emergency_messages(raw_text, language);
        if messages.is_empty() {
            self.data.phrases.emergency_generic.get(language).to_string()
        } else {
            messages.join(SEPARATOR)
        }
    }

    pub fn greeting(&self, language: Language) -> &str {
        self.data.phrases.greeting.get(language)
    }

    pub fn health_tips(&self, language: Language) -> &str {
        self.data.phrases.health_tips.get(language)
    }

    pub fn fallback(&self, language: Language) -> &str {
        self.data.phrases.fallback.get(language)
    }

    pub fn error_message(&self, language: Language) -> &str {
        self.data.phrases.error.get(language)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }
}
