//! Core types for the multilingual health responder
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (English, Hindi, Odia)
//! - Topics and domains (diseases, vaccines)
//! - Upstream parameter shapes
//! - Intent kinds
//! - Localized text
//! - Emergency condition constants
//! - Error types

pub mod emergency;
pub mod error;
pub mod intent;
pub mod language;
pub mod localized;
pub mod param;
pub mod topic;

pub use error::{Error, Result};
pub use intent::IntentKind;
pub use language::{Language, Script};
pub use localized::LocalizedText;
pub use param::{Param, Parameters};
pub use topic::{Domain, Topic};
