use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The first rule a redirect candidate failed.
///
/// Reasons are for logs and operator tooling. End users only ever see the
/// fallback redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    #[error("no redirect target was supplied")]
    Missing,

    #[error("redirect target is empty or whitespace")]
    Empty,

    #[error("redirect target does not start with '/'")]
    NotPathAbsolute,

    #[error("redirect target is protocol-relative ('//')")]
    ProtocolRelative,

    #[error("redirect target starts with '/\\', which browsers treat as '//'")]
    BackslashAuthority,

    #[error("leading path segment contains a scheme delimiter ':'")]
    SchemeInLeadingSegment,

    #[error("redirect target contains a dangerous URI scheme")]
    DangerousScheme,

    #[error("redirect target has malformed percent-encoding")]
    MalformedEncoding,

    #[error("redirect target contains a NUL byte")]
    NullByte,

    #[error("redirect target contains a control character")]
    ControlCharacter,

    #[error("redirect target is percent-encoded too many times")]
    EncodingTooDeep,
}

impl Rejection {
    /// Stable machine-readable code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::NotPathAbsolute => "not-path-absolute",
            Self::ProtocolRelative => "protocol-relative",
            Self::BackslashAuthority => "backslash-authority",
            Self::SchemeInLeadingSegment => "scheme-in-leading-segment",
            Self::DangerousScheme => "dangerous-scheme",
            Self::MalformedEncoding => "malformed-encoding",
            Self::NullByte => "null-byte",
            Self::ControlCharacter => "control-character",
            Self::EncodingTooDeep => "encoding-too-deep",
        }
    }

    /// `false` for the ordinary "no redirect requested" cases.
    ///
    /// Auth forms routinely post an empty `redirectTo`; only the other
    /// reasons indicate a crafted or broken value worth auditing.
    pub const fn is_suspicious(&self) -> bool {
        !matches!(self, Self::Missing | Self::Empty)
    }
}
