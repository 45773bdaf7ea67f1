//! End-to-end behaviour of the health agent over the bundled reference data

use std::fs;
use std::path::PathBuf;

use health_agent_agent::{HealthAgent, HealthRequest};
use health_agent_config::Settings;
use health_agent_core::{Domain, IntentKind, Language, Parameters, Topic};
use health_agent_text_processing::{detect, AliasTable, ContainmentNormalizer, Normalizer};

fn agent() -> HealthAgent {
    HealthAgent::embedded().expect("embedded reference data")
}

fn content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/content")
}

#[test]
fn test_hindi_fever_from_text() {
    let agent = agent();
    let response = agent.handle(&HealthRequest::new("disease_info", "मुझे बुखार है"));

    let data = agent.data();
    let expected = format!(
        "{}\n\n{}",
        data.diseases.info("fever", Language::Hindi).unwrap(),
        data.phrases.medical_disclaimer(Language::Hindi)
    );
    assert_eq!(response.language, Language::Hindi);
    assert_eq!(response.intent, IntentKind::DiseaseInfo);
    assert_eq!(response.text, expected);
}

#[test]
fn test_baby_schedule_in_english() {
    let agent = agent();
    let request =
        HealthRequest::new("vaccine_info", "baby schedule").with_language(Language::English);
    let response = agent.handle(&request);

    let data = agent.data();
    let expected = format!(
        "{}\n\n{}",
        data.vaccines.schedule(Language::English),
        data.phrases.medical_disclaimer(Language::English)
    );
    assert_eq!(response.text, expected);
}

#[test]
fn test_high_fever_advisory() {
    let agent = agent();
    let request = HealthRequest::new("disease_info", "fever 104")
        .with_parameters(Parameters::new().with("disease", "fever"));
    let response = agent.handle(&request);

    let advisory = agent
        .data()
        .phrases
        .emergency("fever_above_103", Language::English)
        .unwrap();
    assert!(response.text.starts_with(advisory));
    assert!(response
        .text
        .ends_with(agent.data().phrases.medical_disclaimer(Language::English)));
}

#[test]
fn test_normal_temperature_has_no_advisory() {
    let agent = agent();
    let request = HealthRequest::new("disease_info", "fever 99")
        .with_parameters(Parameters::new().with("disease", "fever"));
    let response = agent.handle(&request);
    assert!(!response.text.contains("🚨"));
}

#[test]
fn test_odia_breathing_emergency() {
    let agent = agent();
    let response = agent.handle(&HealthRequest::new("emergency", "ଦମ ନେବାରେ କଷ୍ଟ ହେଉଛି"));
    assert_eq!(response.language, Language::Odia);
    assert_eq!(
        response.text,
        agent
            .data()
            .phrases
            .emergency("difficulty_breathing", Language::Odia)
            .unwrap()
    );
}

#[test]
fn test_no_topic_gives_prompt() {
    let agent = agent();
    let lookup = agent.router().lookup();
    let response = lookup.lookup(None, Language::English, "", Domain::Disease);
    assert!(response.starts_with(agent.data().phrases.disease_prompt.get(Language::English)));
}

#[test]
fn test_unknown_disease_is_not_found() {
    let agent = agent();
    let request = HealthRequest::new("disease_info", "")
        .with_parameters(Parameters::new().with("disease", "unknownxyz"));
    let response = agent.handle(&request);
    assert!(response
        .text
        .starts_with(agent.data().phrases.disease_not_found.get(Language::English)));
}

#[test]
fn test_language_parameter_override() {
    let agent = agent();
    let request = HealthRequest::new("general_health", "health tips please")
        .with_parameters(Parameters::new().with("language", "hindi"));
    let response = agent.handle(&request);
    assert_eq!(response.language, Language::Hindi);
    assert_eq!(response.text, agent.data().phrases.health_tips.get(Language::Hindi));
}

#[test]
fn test_detection_properties() {
    assert_eq!(detect("ଟିକା କେବେ ଦିଆଯିବ"), Language::Odia);
    assert_eq!(detect("टीका कब लगेगा"), Language::Hindi);
    assert_eq!(detect("when is the vaccine"), Language::English);
    assert_eq!(detect(""), Language::English);
}

#[test]
fn test_bundled_aliases_resolve() {
    let agent = agent();
    let response = |name: &str| {
        let request = HealthRequest::new("disease_info", "")
            .with_parameters(Parameters::new().with("disease", name));
        agent.handle(&request).text
    };

    assert_eq!(response("jwara"), response("fever"));
    assert_eq!(response("dengue fever"), response("dengue"));
    assert_eq!(response("ମଲେରିଆ"), response("malaria"));
}

#[test]
fn test_handle_is_idempotent() {
    let agent = agent();
    let requests = [
        HealthRequest::new("disease_info", "मुझे बुखार है"),
        HealthRequest::new("vaccine_info", "ଟିକା"),
        HealthRequest::new("", "dengue"),
        HealthRequest::new("emergency", "blood vomit"),
    ];
    for request in &requests {
        assert_eq!(agent.handle(request), agent.handle(request));
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = ContainmentNormalizer::new(
        AliasTable::from_groups([("fever", vec!["jwara"]), ("dengue", vec!["dengue fever"])]),
        AliasTable::default(),
    );
    for input in ["jwara", "dengue fever", "unknownxyz"] {
        let once = normalizer.normalize(input, Domain::Disease).unwrap();
        let twice = normalizer.normalize(once.as_str(), Domain::Disease).unwrap();
        assert_eq!(once, twice);
    }
    assert_eq!(
        normalizer.normalize("jwara", Domain::Disease),
        Some(Topic::new("fever"))
    );
    assert_eq!(normalizer.normalize("", Domain::Disease), None);
}

#[test]
fn test_load_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(content_dir()).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
    }

    let mut settings = Settings::default();
    settings.content.data_dir = Some(dir.path().to_path_buf());
    let agent = HealthAgent::from_settings(&settings).unwrap();

    let response = agent.handle(&HealthRequest::new("welcome", "नमस्ते"));
    assert_eq!(response.text, agent.data().phrases.greeting.get(Language::Hindi));
}

#[test]
fn test_missing_directory_is_an_error() {
    let mut settings = Settings::default();
    settings.content.data_dir = Some(PathBuf::from("/nonexistent/health-agent-content"));
    assert!(HealthAgent::from_settings(&settings).is_err());
}
