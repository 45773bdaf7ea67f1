//! Text available in several languages

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A string with one variant per supported language
///
/// English is mandatory and serves as the fallback for any language
/// whose variant is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odia: Option<String>,
}

impl LocalizedText {
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            hindi: None,
            odia: None,
        }
    }

    pub fn with_hindi(mut self, text: impl Into<String>) -> Self {
        self.hindi = Some(text.into());
        self
    }

    pub fn with_odia(mut self, text: impl Into<String>) -> Self {
        self.odia = Some(text.into());
        self
    }

    /// Text for a language, falling back to English
    pub fn get(&self, language: Language) -> &str {
        self.variant(language).unwrap_or(&self.english)
    }

    /// Text for a language without fallback
    pub fn variant(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => Some(self.english.as_str()),
            Language::Hindi => self.hindi.as_deref(),
            Language::Odia => self.odia.as_deref(),
        }
    }

    /// Languages without their own variant
    pub fn missing_languages(&self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|lang| self.variant(*lang).map_or(true, |t| t.trim().is_empty()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_to_english() {
        let text = LocalizedText::new("Hello").with_hindi("नमस्ते");
        assert_eq!(text.get(Language::Hindi), "नमस्ते");
        assert_eq!(text.get(Language::Odia), "Hello");
        assert_eq!(text.missing_languages(), vec![Language::Odia]);
    }

    #[test]
    fn test_deserialize() {
        let yaml = "english: Hi\nodia: ନମସ୍କାର\n";
        let text: LocalizedText = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(text.get(Language::Odia), "ନମସ୍କାର");
        assert_eq!(text.variant(Language::Hindi), None);
    }
}
