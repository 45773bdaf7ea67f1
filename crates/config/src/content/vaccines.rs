//! Vaccine Table
//!
//! Per-vaccine cards (display name, age, description) plus the complete
//! national immunization schedule.

use health_agent_core::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vaccine table loaded from vaccines.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinesConfig {
    /// Full multi-dose schedule, returned for the "complete" topic
    pub complete_schedule: LocalizedText,
    /// Vaccine cards keyed by canonical topic
    #[serde(default)]
    pub vaccines: BTreeMap<String, VaccineEntry>,
}

/// One vaccine's card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineEntry {
    /// Display name (e.g. "OPV (Polio)")
    pub name: LocalizedText,
    /// When the vaccine is given
    pub age: LocalizedText,
    /// What it protects against
    pub description: LocalizedText,
}

impl VaccineEntry {
    /// Render the card in a language
    pub fn render(&self, language: Language) -> String {
        let name = self.name.get(language);
        let age = self.age.get(language);
        let description = self.description.get(language);
        match language {
            Language::English => format!(
                "💉 {} Vaccine:\n📅 Age: {}\n🛡️ {}",
                name, age, description
            ),
            Language::Hindi => format!("💉 {} टीका:\n📅 उम्र: {}\n🛡️ {}", name, age, description),
            Language::Odia => format!("💉 {} ଟିକା:\n📅 ସମୟ: {}\n🛡️ {}", name, age, description),
        }
    }

    /// Languages missing from any of the card's fields
    pub fn missing_languages(&self) -> Vec<Language> {
        let mut missing: Vec<Language> = self
            .name
            .missing_languages()
            .into_iter()
            .chain(self.age.missing_languages())
            .chain(self.description.missing_languages())
            .collect();
        missing.sort_by_key(|l| l.as_str());
        missing.dedup();
        missing
    }
}

impl VaccinesConfig {
    /// Schedule text in a language (English fallback)
    pub fn schedule(&self, language: Language) -> &str {
        self.complete_schedule.get(language)
    }

    /// Rendered card for a topic
    pub fn info(&self, topic: &str, language: Language) -> Option<String> {
        self.vaccines.get(topic).map(|entry| entry.render(language))
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.vaccines.contains_key(topic)
    }

    /// Canonical vaccine topics, sorted; the schedule sentinel is not included
    pub fn topics(&self) -> Vec<&str> {
        self.vaccines.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.vaccines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaccines.is_empty()
    }
}
