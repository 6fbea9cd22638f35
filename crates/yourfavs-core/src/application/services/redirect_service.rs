//! Redirect Service - the entry point auth handlers call before redirecting.
//!
//! This service coordinates the redirect workflow:
//! 1. Decide the location via the domain `RedirectPolicy`
//! 2. Report suspicious fallbacks to the `RedirectAudit` port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, instrument};

use crate::{
    application::ports::{RedirectAudit, RedirectEvent},
    domain::{AuthFlow, Outcome, RedirectDecision, RedirectPolicy},
};

/// Main redirect service.
pub struct RedirectService {
    policy: RedirectPolicy,
    audit: Box<dyn RedirectAudit>,
}

impl RedirectService {
    /// Create a new redirect service with the given policy and audit sink.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use yourfavs_core::application::RedirectService;
    /// use yourfavs_core::domain::{AuthFlow, DefaultPath, RedirectPolicy};
    ///
    /// let service = RedirectService::new(
    ///     RedirectPolicy::new(DefaultPath::dashboard()),
    ///     audit, // impl RedirectAudit
    /// );
    /// let location = service.location(AuthFlow::Login, Some("/lists/42"));
    /// ```
    pub fn new(policy: RedirectPolicy, audit: Box<dyn RedirectAudit>) -> Self {
        Self { policy, audit }
    }

    pub fn policy(&self) -> &RedirectPolicy {
        &self.policy
    }

    /// Resolve a candidate for `flow`, auditing suspicious fallbacks.
    #[instrument(skip_all, fields(flow = %flow))]
    pub fn resolve(&self, flow: AuthFlow, candidate: Option<&str>) -> RedirectDecision {
        let decision = self.policy.decide(flow, candidate);

        match decision.outcome {
            Outcome::Accepted => {
                debug!(location = %decision.location, "Redirect target accepted");
            }
            Outcome::Fallback { reason } => {
                debug!(
                    reason = reason.as_str(),
                    location = %decision.location,
                    "Redirect target replaced by default"
                );
                if reason.is_suspicious() {
                    self.audit.record(&RedirectEvent {
                        flow,
                        candidate: candidate.unwrap_or_default().to_string(),
                        reason,
                    });
                }
            }
        }

        decision
    }

    /// The `Location` value for `flow`.
    pub fn location(&self, flow: AuthFlow, candidate: Option<&str>) -> String {
        self.resolve(flow, candidate).location
    }
}
