//! Upstream parameters
//!
//! NLU platforms send extracted parameters either as a single string or as a
//! list of strings. Both shapes are reduced to an optional string once, at the
//! boundary, before the router sees them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single parameter value as sent by the upstream classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Scalar(String),
    List(Vec<String>),
}

impl Param {
    /// Canonical text for this value
    ///
    /// Lists reduce to their first element. Blank values are absent.
    pub fn as_text(&self) -> Option<&str> {
        let text = match self {
            Self::Scalar(s) => s.as_str(),
            Self::List(items) => items.first().map(String::as_str)?,
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<Vec<String>> for Param {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Parameters extracted by the upstream classifier
///
/// Values that are neither strings nor string lists (numbers, nested objects)
/// are dropped during deserialization rather than failing the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(HashMap<String, Param>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Param>) {
        self.0.insert(name.into(), value.into());
    }

    /// Canonical text for a named parameter, if present and non-blank
    pub fn text(&self, name: &str) -> Option<String> {
        self.0.get(name).and_then(Param::as_text).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Option<HashMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
        let params = raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, value)| {
                serde_json::from_value::<Param>(value)
                    .ok()
                    .map(|param| (name, param))
            })
            .collect();
        Ok(Self(params))
    }
}

impl FromIterator<(String, Param)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Param)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
