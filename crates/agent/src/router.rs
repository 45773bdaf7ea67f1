//! Intent Router
//!
//! Resolves the upstream intent name to an [`IntentKind`] once and
//! dispatches on it. Topics come from the classifier's parameters when
//! present, otherwise from keyword scans of the raw text.

use std::sync::Arc;

use health_agent_config::{IntentsConfig, ReferenceData};
use health_agent_core::{Domain, IntentKind, Language, Parameters, Topic};
use health_agent_text_processing::{
    AliasTable, ContainmentNormalizer, KeywordScanner, Normalizer,
};

use crate::lookup::ContentLookup;

/// Routes classified requests to the right lookup
pub struct IntentRouter {
    intents: IntentsConfig,
    normalizer: Arc<dyn Normalizer>,
    scanner: KeywordScanner,
    lookup: ContentLookup,
}

impl IntentRouter {
    /// Build the router and its alias tables from reference data
    pub fn new(data: Arc<ReferenceData>) -> Self {
        let normalizer = Arc::new(build_normalizer(&data));
        Self::with_normalizer(data, normalizer)
    }

    /// Build the router with a custom normalizer
    pub fn with_normalizer(data: Arc<ReferenceData>, normalizer: Arc<dyn Normalizer>) -> Self {
        let keywords = &data.keywords;
        let scanner = KeywordScanner::new(
            keywords.disease_groups(),
            keywords.vaccine_keywords.clone(),
            keywords.schedule_keywords.clone(),
        );

        Self {
            intents: data.intents.clone(),
            normalizer,
            scanner,
            lookup: ContentLookup::new(data),
        }
    }

    /// Map an upstream intent name onto an intent kind
    pub fn classify(&self, intent_name: &str) -> IntentKind {
        self.intents.resolve(intent_name)
    }

    /// Produce the response text for a request
    pub fn route(
        &self,
        intent_name: &str,
        parameters: &Parameters,
        raw_text: &str,
        language: Language,
    ) -> String {
        let kind = self.classify(intent_name);
        tracing::debug!(intent = intent_name, kind = %kind, language = %language, "Routing");

        match kind {
            IntentKind::Welcome => self.lookup.greeting(language).to_string(),
            IntentKind::DiseaseInfo => self.disease_info(parameters, raw_text, language),
            IntentKind::VaccineInfo => self.vaccine_info(parameters, raw_text, language),
            IntentKind::Emergency => self.lookup.emergency_response(raw_text, language),
            IntentKind::GeneralHealth => self.lookup.health_tips(language).to_string(),
            IntentKind::Fallback => self.fallback(raw_text, language),
        }
    }

    fn disease_info(&self, parameters: &Parameters, raw_text: &str, language: Language) -> String {
        let name = parameters
            .text(Domain::Disease.parameter_name())
            .or_else(|| self.scanner.scan_disease(raw_text).map(str::to_string));

        let topic = name.and_then(|n| self.normalizer.normalize(&n, Domain::Disease));
        tracing::debug!(topic = ?topic.as_ref().map(Topic::as_str), "Disease topic");

        self.lookup
            .lookup(topic.as_ref(), language, raw_text, Domain::Disease)
    }

    fn vaccine_info(&self, parameters: &Parameters, raw_text: &str, language: Language) -> String {
        let topic = match parameters.text(Domain::Vaccine.parameter_name()) {
            Some(name) => self
                .normalizer
                .normalize(&name, Domain::Vaccine)
                .unwrap_or_else(Topic::complete_schedule),
            None => {
                // Scanned for tracing only; both paths answer with the schedule
                tracing::debug!(
                    schedule_keywords = self.scanner.mentions_schedule(raw_text),
                    "No vaccine named, using schedule"
                );
                Topic::complete_schedule()
            }
        };
        tracing::debug!(topic = %topic, "Vaccine topic");

        self.lookup
            .lookup(Some(&topic), language, raw_text, Domain::Vaccine)
    }

    fn fallback(&self, raw_text: &str, language: Language) -> String {
        if let Some(name) = self.scanner.scan_disease(raw_text) {
            let topic = self.normalizer.normalize(name, Domain::Disease);
            return self
                .lookup
                .lookup(topic.as_ref(), language, raw_text, Domain::Disease);
        }

        if self.scanner.mentions_vaccine(raw_text) {
            let topic = Topic::complete_schedule();
            return self
                .lookup
                .lookup(Some(&topic), language, raw_text, Domain::Vaccine);
        }

        self.lookup.fallback(language).to_string()
    }

    pub fn lookup(&self) -> &ContentLookup {
        &self.lookup
    }
}

/// Alias tables from the aliases config, with every table key also
/// resolving to itself
fn build_normalizer(data: &ReferenceData) -> ContainmentNormalizer {
    let keys = |topics: Vec<&str>| {
        topics
            .into_iter()
            .map(|t| (t.to_string(), Vec::<String>::new()))
            .collect::<Vec<_>>()
    };

    let diseases = AliasTable::from_groups(
        data.aliases
            .diseases
            .clone()
            .into_iter()
            .chain(keys(data.diseases.topics())),
    );
    let vaccines = AliasTable::from_groups(
        data.aliases
            .vaccines
            .clone()
            .into_iter()
            .chain(keys(data.vaccines.topics())),
    )
    .with_generic_topic(Topic::COMPLETE_SCHEDULE);

    tracing::debug!(
        disease_aliases = diseases.len(),
        vaccine_aliases = vaccines.len(),
        "Built alias tables"
    );

    ContainmentNormalizer::new(diseases, vaccines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> IntentRouter {
        IntentRouter::new(Arc::new(ReferenceData::embedded().unwrap()))
    }

    fn data(r: &IntentRouter) -> &ReferenceData {
        r.lookup().data()
    }

    #[test]
    fn test_classify() {
        let r = router();
        assert_eq!(r.classify("Default Welcome Intent"), IntentKind::Welcome);
        assert_eq!(r.classify("disease.info"), IntentKind::DiseaseInfo);
        assert_eq!(r.classify("Disease.Info"), IntentKind::Fallback);
        assert_eq!(r.classify(""), IntentKind::Fallback);
    }

    #[test]
    fn test_welcome_and_tips() {
        let r = router();
        let params = Parameters::new();
        assert_eq!(
            r.route("welcome", &params, "", Language::Odia),
            data(&r).phrases.greeting.get(Language::Odia)
        );
        assert_eq!(
            r.route("health_tips", &params, "", Language::Hindi),
            data(&r).phrases.health_tips.get(Language::Hindi)
        );
    }

    #[test]
    fn test_disease_parameter_list_uses_first() {
        let r = router();
        let params = Parameters::new().with(
            "disease",
            vec!["ମଲେରିଆ".to_string(), "dengue".to_string()],
        );
        let response = r.route("disease_info", &params, "", Language::Odia);
        assert!(response.starts_with(data(&r).diseases.info("malaria", Language::Odia).unwrap()));
    }

    #[test]
    fn test_disease_without_topic_prompts() {
        let r = router();
        let response = r.route("disease_info", &Parameters::new(), "tell me", Language::English);
        assert!(response.starts_with(data(&r).phrases.disease_prompt.get(Language::English)));
    }

    #[test]
    fn test_table_key_resolves_to_itself() {
        let r = router();
        let params = Parameters::new().with("disease", "kidney_stone");
        let response = r.route("disease_info", &params, "", Language::English);
        assert!(response.starts_with(
            data(&r).diseases.info("kidney_stone", Language::English).unwrap()
        ));
    }

    #[test]
    fn test_vaccine_parameter() {
        let r = router();
        let params = Parameters::new().with("vaccine", "BCG vaccine");
        let response = r.route("vaccine_info", &params, "", Language::English);
        assert!(response.starts_with(&data(&r).vaccines.info("bcg", Language::English).unwrap()));

        let params = Parameters::new().with("vaccine", "measles");
        let response = r.route("vaccine_info", &params, "", Language::English);
        assert!(response.starts_with(
            &data(&r).vaccines.info("mr_vaccine", Language::English).unwrap()
        ));
    }

    #[test]
    fn test_vaccine_fragment_gives_schedule() {
        let r = router();
        for name in ["vacc", "vaccin"] {
            let params = Parameters::new().with("vaccine", name);
            let response = r.route("vaccine_info", &params, "", Language::English);
            assert!(
                response.starts_with(data(&r).vaccines.schedule(Language::English)),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_vaccine_default_is_schedule() {
        let r = router();
        let response = r.route("vaccine_info", &Parameters::new(), "", Language::Hindi);
        assert!(response.starts_with(data(&r).vaccines.schedule(Language::Hindi)));
    }

    #[test]
    fn test_emergency_intent() {
        let r = router();
        let params = Parameters::new();
        assert_eq!(
            r.route("emergency", &params, "please help", Language::English),
            data(&r).phrases.emergency_generic.get(Language::English)
        );
        assert_eq!(
            r.route("emergency", &params, "temperature 105", Language::English),
            data(&r).phrases.emergency("fever_above_103", Language::English).unwrap()
        );
    }

    #[test]
    fn test_fallback_paths() {
        let r = router();
        let params = Parameters::new();

        let response = r.route("unknown", &params, "I have cough", Language::English);
        assert!(response.starts_with(data(&r).diseases.info("cold", Language::English).unwrap()));

        let response = r.route("unknown", &params, "ଟିକା କେବେ", Language::Odia);
        assert!(response.starts_with(data(&r).vaccines.schedule(Language::Odia)));

        assert_eq!(
            r.route("unknown", &params, "hello there", Language::English),
            data(&r).phrases.fallback.get(Language::English)
        );
    }

    struct Fixed;

    impl Normalizer for Fixed {
        fn normalize(&self, _alias: &str, _domain: Domain) -> Option<Topic> {
            Some(Topic::new("dengue"))
        }
    }

    #[test]
    fn test_custom_normalizer() {
        let data = Arc::new(ReferenceData::embedded().unwrap());
        let r = IntentRouter::with_normalizer(data.clone(), Arc::new(Fixed));
        let params = Parameters::new().with("disease", "anything");
        let response = r.route("disease_info", &params, "", Language::English);
        assert!(response.starts_with(data.diseases.info("dengue", Language::English).unwrap()));
    }
}
