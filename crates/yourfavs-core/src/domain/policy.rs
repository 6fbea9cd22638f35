//! The redirect validator bound to its fallback target.

use serde::{Deserialize, Serialize};

use crate::domain::{
    rejection::Rejection,
    validation::RedirectValidator,
    value_objects::{AuthFlow, DefaultPath},
};

/// Redirect policy: validation plus a configured default.
///
/// Stateless apart from the default path, so a single instance can be shared
/// across request handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectPolicy {
    default_path: DefaultPath,
}

impl RedirectPolicy {
    pub fn new(default_path: DefaultPath) -> Self {
        Self { default_path }
    }

    pub fn default_path(&self) -> &DefaultPath {
        &self.default_path
    }

    /// Whether `candidate` would be used as-is.
    pub fn is_valid_redirect(&self, candidate: Option<&str>) -> bool {
        RedirectValidator::is_valid(candidate)
    }

    /// The trimmed candidate if it is safe, otherwise the default path.
    ///
    /// Always non-empty and always starts with `/`.
    pub fn validated_redirect<'a>(&'a self, candidate: Option<&'a str>) -> &'a str {
        RedirectValidator::check(candidate).unwrap_or(self.default_path.as_str())
    }

    /// Decide where `flow` should send the user, keeping the reason for any
    /// fallback.
    pub fn decide(&self, flow: AuthFlow, candidate: Option<&str>) -> RedirectDecision {
        let (location, outcome) = match RedirectValidator::check(candidate) {
            Ok(target) => (target.to_string(), Outcome::Accepted),
            Err(reason) => (
                self.default_path.as_str().to_string(),
                Outcome::Fallback { reason },
            ),
        };

        RedirectDecision {
            flow,
            candidate: candidate.map(str::to_string),
            location,
            outcome,
        }
    }
}

/// Whether the candidate was used or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    Accepted,
    Fallback { reason: Rejection },
}

/// The result of resolving one redirect candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDecision {
    pub flow: AuthFlow,
    /// The candidate as supplied, untrimmed.
    pub candidate: Option<String>,
    /// The value to send as the `Location` header.
    pub location: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl RedirectDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self.outcome {
            Outcome::Accepted => None,
            Outcome::Fallback { reason } => Some(reason),
        }
    }
}
