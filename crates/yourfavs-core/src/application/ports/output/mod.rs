//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `yourfavs-adapters` crate provides implementations.

use crate::domain::{AuthFlow, Rejection};

/// A redirect candidate that was replaced by the default path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectEvent {
    pub flow: AuthFlow,
    /// The candidate exactly as supplied. Untrusted: adapters must not
    /// render it unescaped.
    pub candidate: String,
    pub reason: Rejection,
}

/// Port for reporting rejected redirect candidates.
///
/// Implemented by:
/// - `yourfavs_adapters::audit::TracingAudit` (production)
/// - `yourfavs_adapters::audit::MemoryAudit` (testing, batch reports)
///
/// ## Design Notes
///
/// - Infallible: a failing sink must never change where the user is sent
/// - Called only for suspicious rejections, never for accepted targets
#[cfg_attr(test, mockall::automock)]
pub trait RedirectAudit: Send + Sync {
    /// Record one fallback.
    fn record(&self, event: &RedirectEvent);
}
