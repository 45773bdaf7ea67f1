//! Responder trait for abstraction and testability
//!
//! The HTTP layer depends on this trait rather than on [`HealthAgent`]
//! directly, so handlers can be exercised with mock responders.
//!
//! [`HealthAgent`]: crate::HealthAgent

use health_agent_core::Result;

use crate::{HealthRequest, HealthResponse};

/// Anything that turns a classified request into response text
///
/// # Example
///
/// ```
/// use health_agent_agent::{HealthRequest, HealthResponse, Responder};
/// use health_agent_core::{IntentKind, Language};
///
/// struct Echo;
///
/// impl Responder for Echo {
///     fn respond(&self, request: &HealthRequest) -> health_agent_core::Result<HealthResponse> {
///         Ok(HealthResponse {
///             text: request.text.clone(),
///             language: Language::English,
///             intent: IntentKind::Fallback,
///         })
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
///
/// let response = Echo.respond(&HealthRequest::new("", "hi")).unwrap();
/// assert_eq!(response.text, "hi");
/// ```
pub trait Responder: Send + Sync {
    /// Produce the response for one request
    fn respond(&self, request: &HealthRequest) -> Result<HealthResponse>;

    /// Short identifier for logs
    fn name(&self) -> &str;
}
