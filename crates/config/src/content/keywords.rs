//! Keyword Lists
//!
//! Substring keyword lists used when the upstream classifier did not supply
//! a topic: disease guessing, vaccine and schedule detection, and emergency
//! phrase triggers.

use serde::{Deserialize, Serialize};

/// Keywords loaded from keywords.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordsConfig {
    /// Disease keyword groups, scanned in order; the first hit wins
    #[serde(default)]
    pub disease_keywords: Vec<KeywordGroup>,
    /// Words that mark a vaccination question
    #[serde(default)]
    pub vaccine_keywords: Vec<String>,
    /// Words that mark a question about the baby schedule
    #[serde(default)]
    pub schedule_keywords: Vec<String>,
    /// Emergency phrase lists keyed by condition, checked in order
    #[serde(default)]
    pub emergency_triggers: Vec<EmergencyTrigger>,
}

/// Keywords that point at one topic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub topic: String,
    pub keywords: Vec<String>,
}

/// Phrases that signal an emergency condition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyTrigger {
    /// Condition key, matching an entry in `emergency_responses`
    pub condition: String,
    pub phrases: Vec<String>,
}

impl KeywordsConfig {
    /// Disease keyword groups as (topic, keywords) pairs, in scan order
    pub fn disease_groups(&self) -> Vec<(String, Vec<String>)> {
        self.disease_keywords
            .iter()
            .map(|g| (g.topic.clone(), lowercase_all(&g.keywords)))
            .collect()
    }

    /// Emergency triggers as (condition, phrases) pairs, in check order
    pub fn emergency_groups(&self) -> Vec<(String, Vec<String>)> {
        self.emergency_triggers
            .iter()
            .map(|t| (t.condition.clone(), lowercase_all(&t.phrases)))
            .collect()
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
