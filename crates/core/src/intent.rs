//! Intent kinds the responder knows how to answer
//!
//! Upstream classifiers name intents freely ("Default Welcome Intent",
//! "disease.info", ...). Those names are mapped onto this closed set once, and
//! everything downstream matches on the enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// Greeting
    Welcome,
    /// Information about a disease
    DiseaseInfo,
    /// Information about a vaccine or the immunization schedule
    VaccineInfo,
    /// Urgent help
    Emergency,
    /// General health tips
    GeneralHealth,
    /// Unrecognized or empty intent name
    Fallback,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::DiseaseInfo => "disease_info",
            Self::VaccineInfo => "vaccine_info",
            Self::Emergency => "emergency",
            Self::GeneralHealth => "general_health",
            Self::Fallback => "fallback",
        }
    }

    /// Every kind that can be named by an upstream intent
    pub fn routable() -> &'static [IntentKind] {
        &[
            Self::Welcome,
            Self::DiseaseInfo,
            Self::VaccineInfo,
            Self::Emergency,
            Self::GeneralHealth,
        ]
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
