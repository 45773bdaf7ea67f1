//! Intent Name Configuration
//!
//! Maps the intent names an upstream classifier may send onto the closed
//! set of intent kinds the router handles.

use health_agent_core::IntentKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Intent names loaded from intents.yaml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntentsConfig {
    /// Upstream names per intent kind; matching is case-sensitive
    #[serde(default)]
    pub intents: HashMap<IntentKind, Vec<String>>,
}

impl IntentsConfig {
    /// Resolve an upstream intent name, `Fallback` when unknown or empty
    pub fn resolve(&self, name: &str) -> IntentKind {
        if name.is_empty() {
            return IntentKind::Fallback;
        }
        IntentKind::routable()
            .iter()
            .copied()
            .find(|kind| {
                self.intents
                    .get(kind)
                    .is_some_and(|names| names.iter().any(|n| n == name))
            })
            .unwrap_or(IntentKind::Fallback)
    }

    /// Upstream names for a kind
    pub fn names(&self, kind: IntentKind) -> &[String] {
        self.intents.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names listed under more than one kind
    pub fn ambiguous_names(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for names in self.intents.values() {
            for name in names {
                *seen.entry(name.as_str()).or_insert(0) += 1;
            }
        }
        let mut ambiguous: Vec<&str> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect();
        ambiguous.sort_unstable();
        ambiguous
    }
}
