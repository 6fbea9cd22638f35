// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::rejection::Rejection;

/// Root domain error type.
///
/// Validating a redirect candidate never produces one of these: candidates
/// are accepted or replaced. Errors only arise while building the policy
/// itself (its default path, the flow it is labelled with).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("default redirect path '{path}' is not a safe internal path: {reason}")]
    InvalidDefaultPath { path: String, reason: Rejection },

    #[error("unknown auth flow '{0}'")]
    UnknownAuthFlow(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDefaultPath { path, reason } => vec![
                format!("'{}' was rejected ({})", path, reason.as_str()),
                "The default must be a root-relative path such as /dashboard".into(),
                "Set redirect.default_path in your config or YOURFAVS__REDIRECT__DEFAULT_PATH"
                    .into(),
            ],
            Self::UnknownAuthFlow(flow) => vec![
                format!("'{}' is not a known auth flow", flow),
                "Known flows: login, signup, password-reset, password-update".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDefaultPath { .. } => ErrorCategory::Configuration,
            Self::UnknownAuthFlow(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_default_is_a_configuration_error() {
        let err = DomainError::InvalidDefaultPath {
            path: "//evil.com".into(),
            reason: Rejection::ProtocolRelative,
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("//evil.com"));
        assert!(err.suggestions().iter().any(|s| s.contains("protocol-relative")));
    }

    #[test]
    fn unknown_flow_lists_known_flows() {
        let err = DomainError::UnknownAuthFlow("oauth".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("password-update")));
    }
}
