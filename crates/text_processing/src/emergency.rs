//! Emergency detection
//!
//! Two independent checks over the raw text: a body temperature at or above
//! the high-fever threshold, and fixed danger phrases per condition. Every
//! condition that fires is reported; callers decide what to do with them.

use health_agent_core::emergency::{
    BODY_TEMPERATURE_RANGE_F, FEVER_ABOVE_103, HIGH_FEVER_THRESHOLD_F,
};

use crate::keywords::contains_any;
use crate::temperature::{body_temperature, extract_temperature};

/// Detects emergency conditions in user text
#[derive(Debug, Clone, Default)]
pub struct EmergencyDetector {
    /// (condition, phrases) checked in order
    triggers: Vec<(String, Vec<String>)>,
}

impl EmergencyDetector {
    pub fn new(triggers: Vec<(String, Vec<String>)>) -> Self {
        let triggers = triggers
            .into_iter()
            .map(|(condition, phrases)| {
                (condition, phrases.into_iter().map(|p| p.to_lowercase()).collect())
            })
            .collect();
        Self { triggers }
    }

    /// Conditions fired by the text, high fever first then phrase triggers
    /// in configured order
    pub fn check(&self, text: &str) -> Vec<&str> {
        let mut fired = Vec::new();

        if let Some(temp) = self.temperature(text) {
            if temp >= HIGH_FEVER_THRESHOLD_F {
                tracing::debug!(temperature = temp, "High fever detected");
                fired.push(FEVER_ABOVE_103);
            }
        }

        let lower = text.to_lowercase();
        for (condition, phrases) in &self.triggers {
            if contains_any(&lower, phrases) {
                tracing::debug!(condition = %condition, "Emergency phrase detected");
                fired.push(condition.as_str());
            }
        }

        fired
    }

    /// Plausible body temperature mentioned in the text
    ///
    /// Standalone tokens are tried first; the looser pattern extraction is
    /// the fallback and is range-checked the same way.
    pub fn temperature(&self, text: &str) -> Option<f64> {
        body_temperature(text)
            .or_else(|| extract_temperature(text).filter(|t| BODY_TEMPERATURE_RANGE_F.contains(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> EmergencyDetector {
        let trigger = |condition: &str, phrases: &[&str]| {
            (
                condition.to_string(),
                phrases.iter().map(|p| p.to_string()).collect(),
            )
        };
        EmergencyDetector::new(vec![
            trigger("severe_stomach_pain", &["severe pain", "stomach pain", "पेट दर्द"]),
            trigger("difficulty_breathing", &["Can't breathe", "ଦମ ନେବାରେ କଷ୍ଟ"]),
            trigger("blood_vomiting", &["blood vomit", "खून की उल्टी"]),
        ])
    }

    #[test]
    fn test_high_fever() {
        let d = detector();
        assert_eq!(d.check("fever 104"), vec![FEVER_ABOVE_103]);
        assert_eq!(d.check("temperature 103"), vec![FEVER_ABOVE_103]);
        assert!(d.check("fever 102.5").is_empty());
        assert!(d.check("fever for 3 days").is_empty());
    }

    #[test]
    fn test_implausible_temperature_is_ignored() {
        let d = detector();
        assert!(d.check("fever 120").is_empty());
        assert_eq!(d.check("fever 115"), vec![FEVER_ABOVE_103]);
    }

    #[test]
    fn test_phrase_triggers() {
        let d = detector();
        assert_eq!(d.check("I CAN'T BREATHE"), vec!["difficulty_breathing"]);
        assert_eq!(d.check("बच्चे के पेट दर्द है"), vec!["severe_stomach_pain"]);
        assert_eq!(d.check("ଦମ ନେବାରେ କଷ୍ଟ ହେଉଛି"), vec!["difficulty_breathing"]);
        assert!(d.check("mild headache").is_empty());
    }

    #[test]
    fn test_conditions_fire_independently() {
        let d = detector();
        assert_eq!(
            d.check("fever 105 and blood vomit"),
            vec![FEVER_ABOVE_103, "blood_vomiting"]
        );
    }

    #[test]
    fn test_temperature_fallback_pattern() {
        let d = detector();
        // no whitespace between number and word, caught by the pattern pass
        assert_eq!(d.temperature("temp:104"), Some(104.0));
        assert_eq!(d.temperature("age 5"), None);
    }
}
