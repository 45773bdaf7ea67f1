//! Alias Normalization
//!
//! Maps free-form disease and vaccine names, in any supported script, to
//! canonical topic keys.
//!
//! Lookup order for a trimmed, lower-cased input:
//! 1. Exact alias match
//! 2. The longest alias contained in the input (ties: lexicographically first)
//! 3. The shortest alias that contains the input (ties: lexicographically first)
//! 4. No match: the lower-cased input itself
//!
//! Step 2 considers a table's generic topic (the vaccine schedule sentinel)
//! only when no other topic matches, so "bcg vaccine" resolves to `bcg`
//! rather than the schedule. Step 3 treats it like any other topic, so a
//! fragment such as "vacc" resolves to the schedule.
//!
//! Containment means short aliases such as "tb" or "je" can match inside
//! unrelated words. That is accepted.

use health_agent_core::{Domain, Topic};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Canonicalizes free-form topic names
pub trait Normalizer: Send + Sync {
    /// Resolve `alias` in `domain`
    ///
    /// Blank input is "no topic given" and yields `None`. Unknown names come
    /// back as their lower-cased selves so the lookup can answer "not found".
    fn normalize(&self, alias: &str, domain: Domain) -> Option<Topic>;
}

#[derive(Debug, Clone)]
struct AliasEntry {
    alias: String,
    topic: String,
    len: usize,
}

/// Alias to topic mapping for one domain
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    exact: HashMap<String, String>,
    entries: Vec<AliasEntry>,
    generic_topic: Option<String>,
}

impl AliasTable {
    /// Build from (alias, topic) pairs; the first claim on an alias wins
    pub fn new<A, T>(pairs: impl IntoIterator<Item = (A, T)>) -> Self
    where
        A: AsRef<str>,
        T: Into<String>,
    {
        let mut table = Self::default();
        for (alias, topic) in pairs {
            table.insert(alias.as_ref(), topic.into());
        }
        table
    }

    /// Build from topic groups; each topic key is also an alias of itself
    pub fn from_groups<T, A, I>(groups: impl IntoIterator<Item = (T, I)>) -> Self
    where
        T: AsRef<str>,
        A: AsRef<str>,
        I: IntoIterator<Item = A>,
    {
        let mut table = Self::default();
        for (topic, aliases) in groups {
            let topic = topic.as_ref();
            table.insert(topic, topic.to_string());
            for alias in aliases {
                table.insert(alias.as_ref(), topic.to_string());
            }
        }
        table
    }

    /// Mark a topic as generic: containment only picks it as a last resort
    pub fn with_generic_topic(mut self, topic: impl Into<String>) -> Self {
        self.generic_topic = Some(topic.into());
        self
    }

    fn insert(&mut self, alias: &str, topic: String) {
        let alias = alias.trim().to_lowercase();
        if alias.is_empty() || self.exact.contains_key(&alias) {
            return;
        }
        self.exact.insert(alias.clone(), topic.clone());
        self.entries.push(AliasEntry {
            len: alias.chars().count(),
            alias,
            topic,
        });
    }

    /// Resolve an already lower-cased, trimmed key
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if let Some(topic) = self.exact.get(key) {
            return Some(topic.as_str());
        }

        // Longest alias inside the input, specific topics first
        let contained = self.best(
            |e| key.contains(e.alias.as_str()),
            |a, b| b.len.cmp(&a.len).then_with(|| a.alias.cmp(&b.alias)),
            true,
        );
        if contained.is_some() {
            return contained;
        }

        // Shortest alias around the input; the generic topic competes equally
        self.best(
            |e| e.alias.contains(key),
            |a, b| a.len.cmp(&b.len).then_with(|| a.alias.cmp(&b.alias)),
            false,
        )
    }

    /// Best matching entry under `order`
    ///
    /// With `specific_first`, the generic topic is only picked when nothing
    /// else matches.
    fn best<M, C>(&self, matches: M, order: C, specific_first: bool) -> Option<&str>
    where
        M: Fn(&AliasEntry) -> bool,
        C: Fn(&AliasEntry, &AliasEntry) -> Ordering,
    {
        let is_generic = |e: &AliasEntry| self.generic_topic.as_deref() == Some(e.topic.as_str());

        let pick = |filter: &dyn Fn(&AliasEntry) -> bool| {
            self.entries
                .iter()
                .filter(|e| filter(e) && matches(e))
                .min_by(|a, b| order(a, b))
                .map(|e| e.topic.as_str())
        };

        if specific_first {
            pick(&|e| !is_generic(e)).or_else(|| pick(&|e| is_generic(e)))
        } else {
            pick(&|_| true)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Exact-then-containment normalizer over per-domain alias tables
#[derive(Debug, Clone, Default)]
pub struct ContainmentNormalizer {
    diseases: AliasTable,
    vaccines: AliasTable,
}

impl ContainmentNormalizer {
    pub fn new(diseases: AliasTable, vaccines: AliasTable) -> Self {
        Self { diseases, vaccines }
    }

    fn table(&self, domain: Domain) -> &AliasTable {
        match domain {
            Domain::Disease => &self.diseases,
            Domain::Vaccine => &self.vaccines,
        }
    }
}

impl Normalizer for ContainmentNormalizer {
    fn normalize(&self, alias: &str, domain: Domain) -> Option<Topic> {
        let key = alias.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        let topic = match self.table(domain).resolve(&key) {
            Some(topic) => Topic::new(topic),
            None => {
                tracing::debug!(%domain, input = %key, "No alias matched");
                Topic::new(key)
            }
        };
        Some(topic)
    }
}
