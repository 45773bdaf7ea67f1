//! Core error types

use thiserror::Error;

/// Errors raised while preparing a response
///
/// Request handling itself never fails: lookup misses and malformed input
/// turn into fallback text. These errors cover the surrounding plumbing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Reference data unavailable: {0}")]
    ReferenceData(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
