//! Text Processing for the Health Responder
//!
//! This crate provides the pure text functions the router is built on:
//! - **Language Detection**: English, Hindi or Odia from free text
//! - **Normalization**: Free-form disease/vaccine names to canonical topics
//! - **Keyword Scanning**: Topic guessing when the classifier gave none
//! - **Temperature Extraction**: Body temperatures mentioned in text
//! - **Emergency Detection**: High fever and fixed danger phrases
//!
//! Everything here is synchronous and side-effect free; the tables are
//! built once and shared read-only.
//!
//! # Example
//!
//! ```
//! use health_agent_core::{Domain, Language};
//! use health_agent_text_processing::{detect, AliasTable, ContainmentNormalizer, Normalizer};
//!
//! assert_eq!(detect("मुझे बुखार है"), Language::Hindi);
//!
//! let normalizer = ContainmentNormalizer::new(
//!     AliasTable::from_groups([("fever", vec!["jwara", "बुखार"])]),
//!     AliasTable::default(),
//! );
//! let topic = normalizer.normalize("Jwara", Domain::Disease).unwrap();
//! assert_eq!(topic.as_str(), "fever");
//! ```

pub mod detect;
pub mod emergency;
pub mod keywords;
pub mod normalize;
pub mod temperature;

pub use detect::{detect, LanguageDetector};
pub use emergency::EmergencyDetector;
pub use keywords::{contains_any, KeywordScanner};
pub use normalize::{AliasTable, ContainmentNormalizer, Normalizer};
pub use temperature::{body_temperature, extract_temperature};
