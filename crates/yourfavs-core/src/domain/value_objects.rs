//! Domain value objects: DefaultPath, AuthFlow.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `DefaultPath` upholds its invariant at construction so that every
//! fallback redirect the system can produce is itself a valid redirect.

use crate::domain::{error::DomainError, validation::RedirectValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DefaultPath ──────────────────────────────────────────────────────────────

/// The fallback redirect target.
///
/// Invariant: accepted by [`RedirectValidator`]. Enforced at construction,
/// including when deserialized from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DefaultPath(String);

impl DefaultPath {
    /// The built-in fallback.
    pub const DASHBOARD: &'static str = "/dashboard";

    /// Validate and wrap a configured default path.
    ///
    /// Surrounding whitespace is trimmed, mirroring how candidates are
    /// treated.
    pub fn parse(path: &str) -> Result<Self, DomainError> {
        RedirectValidator::check(Some(path))
            .map(|trimmed| Self(trimmed.to_string()))
            .map_err(|reason| DomainError::InvalidDefaultPath {
                path: path.to_string(),
                reason,
            })
    }

    /// `/dashboard`.
    pub fn dashboard() -> Self {
        Self(Self::DASHBOARD.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DefaultPath {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl AsRef<str> for DefaultPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefaultPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DefaultPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DefaultPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DefaultPath> for String {
    fn from(path: DefaultPath) -> Self {
        path.0
    }
}

// ── AuthFlow ─────────────────────────────────────────────────────────────────

/// The authentication flow that is about to issue a redirect.
///
/// Only labels decisions for logs and audit events; validation is identical
/// for every flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthFlow {
    #[default]
    Login,
    Signup,
    PasswordReset,
    PasswordUpdate,
}

impl AuthFlow {
    pub const ALL: [AuthFlow; 4] = [
        Self::Login,
        Self::Signup,
        Self::PasswordReset,
        Self::PasswordUpdate,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::PasswordReset => "password-reset",
            Self::PasswordUpdate => "password-update",
        }
    }
}

impl fmt::Display for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthFlow {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "login" | "signin" | "sign-in" => Ok(Self::Login),
            "signup" | "sign-up" => Ok(Self::Signup),
            "password-reset" | "reset" => Ok(Self::PasswordReset),
            "password-update" | "update-password" => Ok(Self::PasswordUpdate),
            other => Err(DomainError::UnknownAuthFlow(other.to_string())),
        }
    }
}
