//! YourFavs Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating the
//! `redirectTo` targets that YourFavs auth flows (login, signup, password
//! reset and update) redirect to once they complete.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     yourfavs-cli / auth handlers        │
//! │     (Call the driving service)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (RedirectService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: RedirectAudit)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    yourfavs-adapters (Infrastructure)   │
//! │       (TracingAudit, MemoryAudit)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (RedirectValidator, RedirectPolicy)    │
//! │         No I/O, no shared state         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use yourfavs_core::domain::{DefaultPath, RedirectPolicy, is_valid_redirect};
//!
//! assert!(is_valid_redirect(Some("/dashboard")));
//! assert!(!is_valid_redirect(Some("//evil.com")));
//!
//! let policy = RedirectPolicy::new(DefaultPath::dashboard());
//! assert_eq!(policy.validated_redirect(Some(" /lists/42 ")), "/lists/42");
//! assert_eq!(policy.validated_redirect(Some("javascript:alert(1)")), "/dashboard");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{RedirectAudit, RedirectEvent, RedirectService};
    pub use crate::domain::{
        AuthFlow, DefaultPath, Outcome, RedirectDecision, RedirectPolicy, RedirectValidator,
        Rejection, is_valid_redirect,
    };
    pub use crate::error::{YourFavsError, YourFavsResult};
}
