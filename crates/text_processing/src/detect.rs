//! Script and language detection
//!
//! Precedence, first hit wins:
//! 1. An explicit language-name token ("hindi", "oriya", "ଓଡ଼ିଆ", ...)
//! 2. Any Odia-block character, then any Devanagari-block character
//! 3. Any basic-Latin letter
//! 4. Common-word counts, strictly highest wins, English on ties

use health_agent_core::{Language, Script};
use once_cell::sync::Lazy;

static DEFAULT_DETECTOR: Lazy<LanguageDetector> = Lazy::new(LanguageDetector::new);

/// Detect the language of `text` with the default word lists
pub fn detect(text: &str) -> Language {
    DEFAULT_DETECTOR.detect(text)
}

/// Language-name tokens, checked in this order
const INDICATORS: &[(Language, &[&str])] = &[
    (Language::Odia, &["odia", "ଓଡ଼ିଆ", "oriya"]),
    (Language::Hindi, &["hindi", "हिंदी", "हिन्दी", "devanagari"]),
    (Language::English, &["english", "angrezi"]),
];

const ODIA_WORDS: &[&str] = &[
    "କଣ", "କେମିତି", "କେବେ", "କେଉଁ", "ଜ୍ୱର", "ଶର୍ଦି", "ମଲେରିଆ", "ଡେଙ୍ଗୁ", "ଟିକା", "ବାଚ୍ଚା",
    "ଶିଶୁ", "ରୋଗ", "ଚିକିତ୍ସା", "ଡାକ୍ତର", "ସ୍ୱାସ୍ଥ୍ୟ", "kana", "kemiti", "kebe", "koun", "jwara",
];

const HINDI_WORDS: &[&str] = &[
    "क्या", "कैसे", "कब", "कौन", "बुखार", "सर्दी", "मलेरिया", "डेंगू", "टीका", "बच्चा", "शिशु",
    "बीमारी", "इलाज", "डॉक्टर", "स्वास्थ्य", "kya", "kaise", "kab", "kaun", "bukhar",
];

const ENGLISH_WORDS: &[&str] = &[
    "what", "how", "when", "which", "fever", "cold", "malaria", "dengue", "vaccine", "baby",
    "child", "disease", "treatment", "doctor", "health",
];

/// Rule-based language detector
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    indicators: Vec<(Language, Vec<String>)>,
    common_words: Vec<(Language, Vec<String>)>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    /// Create a detector with the built-in word lists
    pub fn new() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_lowercase()).collect::<Vec<_>>();

        Self {
            indicators: INDICATORS
                .iter()
                .map(|(lang, words)| (*lang, owned(words)))
                .collect(),
            common_words: vec![
                (Language::Odia, owned(ODIA_WORDS)),
                (Language::Hindi, owned(HINDI_WORDS)),
                (Language::English, owned(ENGLISH_WORDS)),
            ],
        }
    }

    /// Detect language; empty or whitespace-only input is English
    pub fn detect(&self, text: &str) -> Language {
        let text = text.trim();
        if text.is_empty() {
            return Language::English;
        }

        let lower = text.to_lowercase();

        if let Some(lang) = self.explicit_language(&lower) {
            tracing::trace!(language = %lang, "Language named explicitly");
            return lang;
        }

        if let Some(lang) = Self::by_script(text) {
            return lang;
        }

        self.by_common_words(&lower)
    }

    /// Detect language of an optional value, English when absent
    pub fn detect_opt(&self, text: Option<&str>) -> Language {
        text.map(|t| self.detect(t)).unwrap_or_default()
    }

    /// Language named by a whole token in the text
    fn explicit_language(&self, lower: &str) -> Option<Language> {
        let tokens: Vec<&str> = tokenize(lower).collect();
        self.indicators
            .iter()
            .find(|(_, names)| tokens.iter().any(|t| names.iter().any(|n| n == t)))
            .map(|(lang, _)| *lang)
    }

    /// Odia is checked before Devanagari, Latin last
    fn by_script(text: &str) -> Option<Language> {
        if Script::Odia.count(text) > 0 {
            Some(Language::Odia)
        } else if Script::Devanagari.count(text) > 0 {
            Some(Language::Hindi)
        } else if Script::Latin.count(text) > 0 {
            Some(Language::English)
        } else {
            None
        }
    }

    fn by_common_words(&self, lower: &str) -> Language {
        let count = |lang: Language| {
            self.common_words
                .iter()
                .find(|(l, _)| *l == lang)
                .map(|(_, words)| words.iter().filter(|w| lower.contains(w.as_str())).count())
                .unwrap_or(0)
        };

        let odia = count(Language::Odia);
        let hindi = count(Language::Hindi);
        let english = count(Language::English);

        if odia > hindi && odia > english {
            Language::Odia
        } else if hindi > english {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

/// Split on whitespace, ASCII punctuation and the danda
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।' || c == '॥')
        .filter(|t| !t.is_empty())
}
