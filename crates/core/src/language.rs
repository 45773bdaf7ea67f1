//! Language definitions for the supported Indian languages
//!
//! The responder answers in English, Hindi and Odia. Anything it cannot
//! place resolves to English.

use serde::{Deserialize, Serialize};

/// Supported response languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Odia,
}

impl Language {
    /// Get lowercase identifier, as used in reference data and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Odia => "odia",
        }
    }

    /// Parse from string (case-insensitive)
    ///
    /// Accepts ISO codes, English names and the native-script names.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" | "angrezi" => Some(Self::English),
            "hi" | "hin" | "hindi" | "हिंदी" | "हिन्दी" => Some(Self::Hindi),
            "or" | "ori" | "od" | "odia" | "oriya" | "ଓଡ଼ିଆ" => Some(Self::Odia),
            _ => None,
        }
    }

    /// Parse from string, falling back to English
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str_loose(s).unwrap_or_default()
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Hindi, Self::Odia]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Script systems the detector distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Odia,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
            Self::Odia => (0x0B00, 0x0B7F),
        }
    }

    /// Check if a character belongs to this script
    ///
    /// For Latin only alphabetic characters count, so digits and
    /// punctuation never vote for English.
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        let in_range = code >= start && code <= end;
        match self {
            Self::Latin => in_range && c.is_ascii_alphabetic(),
            _ => in_range,
        }
    }

    /// Count characters of this script in text
    pub fn count(&self, text: &str) -> usize {
        text.chars().filter(|c| self.contains_char(*c)).count()
    }
}
