//! Keyword scanning over raw user text
//!
//! Plain lower-cased substring checks, used when the upstream classifier did
//! not supply a topic.

/// True if any word occurs in `text_lower`
pub fn contains_any<S: AsRef<str>>(text_lower: &str, words: &[S]) -> bool {
    words.iter().any(|w| text_lower.contains(w.as_ref()))
}

/// Keyword lists for disease guessing and vaccine/schedule detection
#[derive(Debug, Clone, Default)]
pub struct KeywordScanner {
    disease_groups: Vec<(String, Vec<String>)>,
    vaccine_keywords: Vec<String>,
    schedule_keywords: Vec<String>,
}

impl KeywordScanner {
    /// `disease_groups` is scanned in order; the first group with a hit wins
    pub fn new(
        disease_groups: Vec<(String, Vec<String>)>,
        vaccine_keywords: Vec<String>,
        schedule_keywords: Vec<String>,
    ) -> Self {
        Self {
            disease_groups,
            vaccine_keywords: lowercase(vaccine_keywords),
            schedule_keywords: lowercase(schedule_keywords),
        }
    }

    /// First disease topic whose keywords occur in the text
    pub fn scan_disease(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.disease_groups
            .iter()
            .find(|(_, keywords)| contains_any(&lower, keywords))
            .map(|(topic, _)| topic.as_str())
    }

    /// Text talks about vaccination
    pub fn mentions_vaccine(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), &self.vaccine_keywords)
    }

    /// Text asks about the baby schedule
    pub fn mentions_schedule(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), &self.schedule_keywords)
    }
}

fn lowercase(words: Vec<String>) -> Vec<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}
