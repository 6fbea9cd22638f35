//! Audit adapter that emits `tracing` events.

use yourfavs_core::application::ports::{RedirectAudit, RedirectEvent};

/// Longest candidate prefix written to logs, in characters.
pub const MAX_LOGGED_CANDIDATE: usize = 128;

/// Production audit sink: one `warn` event per rejected candidate.
///
/// Candidates are attacker-controlled, so they are logged with `Debug`
/// escaping and truncated.
#[derive(Debug, Clone, Copy)]
pub struct TracingAudit;

impl TracingAudit {
    /// Create a new tracing audit adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAudit {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectAudit for TracingAudit {
    fn record(&self, event: &RedirectEvent) {
        tracing::warn!(
            flow = %event.flow,
            reason = event.reason.as_str(),
            candidate = ?truncate(&event.candidate),
            "Rejected redirect target"
        );
    }
}

fn truncate(candidate: &str) -> &str {
    match candidate.char_indices().nth(MAX_LOGGED_CANDIDATE) {
        Some((end, _)) => &candidate[..end],
        None => candidate,
    }
}
