//! Health Agent
//!
//! Features:
//! - Intent routing over a closed set of intent kinds
//! - Topic extraction from classifier parameters or keyword scans
//! - Content lookup with emergency advisories and medical disclaimers
//! - Language resolution from hints, upstream parameters or detection
//! - Responder trait for testability

pub mod agent;
pub mod lookup;
pub mod router;
pub mod traits;

pub use agent::{HealthAgent, HealthRequest, HealthResponse, LANGUAGE_PARAMETER};
pub use lookup::ContentLookup;
pub use router::IntentRouter;
pub use traits::Responder;
