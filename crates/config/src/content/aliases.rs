//! Alias Tables
//!
//! Free-form names (English, transliterated, Devanagari, Odia) grouped under
//! the canonical topic they resolve to.

use health_agent_core::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aliases loaded from aliases.yaml, keyed by topic
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AliasesConfig {
    #[serde(default)]
    pub diseases: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub vaccines: BTreeMap<String, Vec<String>>,
}

impl AliasesConfig {
    fn groups(&self, domain: Domain) -> &BTreeMap<String, Vec<String>> {
        match domain {
            Domain::Disease => &self.diseases,
            Domain::Vaccine => &self.vaccines,
        }
    }

    /// Flattened (alias, topic) pairs for a domain, aliases lower-cased
    pub fn entries(&self, domain: Domain) -> Vec<(String, String)> {
        self.groups(domain)
            .iter()
            .flat_map(|(topic, aliases)| {
                aliases
                    .iter()
                    .map(move |alias| (alias.trim().to_lowercase(), topic.clone()))
            })
            .filter(|(alias, _)| !alias.is_empty())
            .collect()
    }

    /// Topics that aliases resolve to in a domain
    pub fn topics(&self, domain: Domain) -> Vec<&str> {
        self.groups(domain).keys().map(String::as_str).collect()
    }

    /// Aliases claimed by more than one topic in a domain
    pub fn conflicts(&self, domain: Domain) -> Vec<(String, Vec<String>)> {
        let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (alias, topic) in self.entries(domain) {
            let topics = owners.entry(alias).or_default();
            if !topics.contains(&topic) {
                topics.push(topic);
            }
        }
        owners.into_iter().filter(|(_, t)| t.len() > 1).collect()
    }
}
