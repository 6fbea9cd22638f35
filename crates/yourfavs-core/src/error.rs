//! Unified error handling for YourFavs Core.
//!
//! Redirect validation itself never fails. These errors cover building the
//! policy: an unsafe configured default or an unknown flow name.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for YourFavs Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum YourFavsError {
    /// Errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl YourFavsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}

/// Convenient result type alias.
pub type YourFavsResult<T> = Result<T, YourFavsError>;
