// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for YourFavs redirect handling.
//!
//! This module contains pure validation logic with no I/O. Reporting of
//! rejected candidates is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment access
//! - **No shared state**: Every check is a pure function of its input
//! - **Immutable values**: `DefaultPath`, `AuthFlow`, `RedirectDecision`
//!
// Public API - what the world sees
pub mod error;
pub mod percent;
pub mod policy;
pub mod rejection;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use policy::{Outcome, RedirectDecision, RedirectPolicy};
pub use rejection::Rejection;
pub use validation::{RedirectValidator, is_valid_redirect};
pub use value_objects::{AuthFlow, DefaultPath};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Reference scenarios
    // ========================================================================

    fn dashboard() -> RedirectPolicy {
        RedirectPolicy::new(DefaultPath::dashboard())
    }

    #[test]
    fn internal_path_is_kept() {
        assert!(is_valid_redirect(Some("/dashboard")));
        assert_eq!(dashboard().validated_redirect(Some("/dashboard")), "/dashboard");
    }

    #[test]
    fn protocol_relative_falls_back() {
        assert!(!is_valid_redirect(Some("//evil.com")));
        assert_eq!(dashboard().validated_redirect(Some("//evil.com")), "/dashboard");
    }

    #[test]
    fn javascript_scheme_is_rejected() {
        assert!(!is_valid_redirect(Some("javascript:alert(1)")));
    }

    #[test]
    fn absolute_url_is_rejected() {
        assert!(!is_valid_redirect(Some("https://evil.com")));
    }

    #[test]
    fn encoded_protocol_relative_is_rejected() {
        assert!(!is_valid_redirect(Some("/%2f%2fevil.com")));
    }

    #[test]
    fn absent_candidate_falls_back() {
        assert!(!is_valid_redirect(None));
        assert_eq!(dashboard().validated_redirect(None), "/dashboard");
    }

    #[test]
    fn padded_candidate_is_trimmed() {
        assert!(is_valid_redirect(Some("  /dashboard  ")));
        assert_eq!(
            dashboard().validated_redirect(Some("  /dashboard  ")),
            "/dashboard"
        );
    }

    #[test]
    fn benign_encoding_is_preserved() {
        assert!(is_valid_redirect(Some("/search?q=hello%20world")));
        assert_eq!(
            dashboard().validated_redirect(Some("/search?q=hello%20world")),
            "/search?q=hello%20world"
        );
    }
}
