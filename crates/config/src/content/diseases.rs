//! Disease Information Table
//!
//! Disease topics mapped to their information text in each language.

use health_agent_core::{Language, LocalizedText};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Disease table loaded from diseases.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiseasesConfig {
    /// Information text keyed by canonical topic
    #[serde(default)]
    pub diseases: BTreeMap<String, LocalizedText>,
}

impl DiseasesConfig {
    /// Information text for a topic in a language (English fallback)
    pub fn info(&self, topic: &str, language: Language) -> Option<&str> {
        self.diseases.get(topic).map(|text| text.get(language))
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.diseases.contains_key(topic)
    }

    /// Canonical topics, sorted
    pub fn topics(&self) -> Vec<&str> {
        self.diseases.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}
