//! Topics and the domains they belong to

use serde::{Deserialize, Serialize};

/// Which reference table a topic is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Disease,
    Vaccine,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Vaccine => "vaccine",
        }
    }

    /// Name of the upstream parameter carrying a topic for this domain
    pub fn parameter_name(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical key identifying a disease or vaccine in reference data
///
/// A topic is only a lookup key. Keys that are absent from the tables are
/// still valid topics; they resolve to a "not found" response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Vaccine-domain sentinel meaning "the full immunization schedule"
    pub const COMPLETE_SCHEDULE: &'static str = "complete";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The schedule sentinel topic
    pub fn complete_schedule() -> Self {
        Self::new(Self::COMPLETE_SCHEDULE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_complete_schedule(&self) -> bool {
        self.0 == Self::COMPLETE_SCHEDULE
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Self(s)
    }
}
