//! Body temperature extraction

use health_agent_core::emergency::BODY_TEMPERATURE_RANGE_F;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tried in order; the first pattern with a match decides
static TEMPERATURE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+(?:\.\d+)?)\s*(?:degree|°|deg)?\s*(?:f|fahrenheit|फ|ଫ)?",
        r"(\d+(?:\.\d+)?)\s*(?:ଡିଗ୍ରୀ|डिग्री)",
        r"temperature\s+(\d+(?:\.\d+)?)",
        r"temp\s+(\d+(?:\.\d+)?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static temperature pattern"))
    .collect()
});

/// Unit markers stripped from the end of a temperature token
const UNIT_SUFFIXES: &[&str] = &[
    "fahrenheit", "degrees", "degree", "deg", "डिग्री", "ଡିଗ୍ରୀ", "°f", "°", "f", "फ", "ଫ",
];

/// First number in the text that may be a temperature
///
/// Matches a number with an optional degree/fahrenheit marker, a number
/// followed by the Hindi or Odia word for degree, or a number after
/// "temperature"/"temp". The value is not range-checked.
pub fn extract_temperature(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }

    let lower = ascii_digits(&text.to_lowercase());
    TEMPERATURE_PATTERNS
        .iter()
        .filter_map(|re| re.captures(&lower))
        .find_map(|caps| caps.get(1).and_then(|m| m.as_str().parse().ok()))
}

/// First standalone token that reads as a plausible body temperature (°F)
///
/// A token is digits with an optional decimal part and an optional unit
/// suffix (°, f, degree, fahrenheit, Hindi/Odia forms). Values outside the
/// plausible body-temperature range are skipped, so ages and counts do not
/// register.
pub fn body_temperature(text: &str) -> Option<f64> {
    let lower = ascii_digits(&text.to_lowercase());
    lower
        .split_whitespace()
        .filter_map(parse_temperature_token)
        .find(|value| BODY_TEMPERATURE_RANGE_F.contains(value))
}

fn parse_temperature_token(token: &str) -> Option<f64> {
    let mut token = token.trim_matches(|c: char| matches!(c, ',' | '!' | '?' | ';' | ':' | '(' | ')' | '।'));
    token = token.trim_end_matches('.');

    loop {
        match UNIT_SUFFIXES.iter().find(|s| token.len() > s.len() && token.ends_with(*s)) {
            Some(suffix) => token = &token[..token.len() - suffix.len()],
            None => break,
        }
    }

    let mut parts = token.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if digits(whole) && fraction.map_or(true, digits) {
        token.parse().ok()
    } else {
        None
    }
}

/// Replace Devanagari and Odia digits with ASCII ones
fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            0x0966..=0x096F => char::from(b'0' + (c as u32 - 0x0966) as u8),
            0x0B66..=0x0B6F => char::from(b'0' + (c as u32 - 0x0B66) as u8),
            _ => c,
        })
        .collect()
}
