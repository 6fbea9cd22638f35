use std::borrow::Cow;

use crate::domain::{percent, rejection::Rejection};

/// URI schemes that execute or embed content when used as a link target.
pub const DANGEROUS_SCHEMES: &[&str] = &["javascript", "data", "vbscript"];

/// Most percent-decoding passes a candidate may need.
pub const MAX_DECODE_DEPTH: usize = 8;

/// Centralized redirect validation.
///
/// The policy is structural: a candidate must look like a root-relative
/// internal path (`/...`) on the raw string and on every percent-decoded
/// layer of it. Scheme and protocol-relative checks close the gaps that
/// "starts with `/`" leaves open (`//evil.com`, `/javascript:...`).
pub struct RedirectValidator;

impl RedirectValidator {
    /// Validate a candidate, returning the trimmed target or the first rule
    /// it failed.
    pub fn check(candidate: Option<&str>) -> Result<&str, Rejection> {
        let raw = candidate.ok_or(Rejection::Missing)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Rejection::Empty);
        }

        check_layer(trimmed)?;

        // Decode until no escapes remain so that an extra encoding layer can
        // never hide a pattern that the inner layer would be rejected for.
        let mut layer = Cow::Borrowed(trimmed);
        let mut depth = 0;
        while percent::has_escape(&layer) {
            if depth == MAX_DECODE_DEPTH {
                return Err(Rejection::EncodingTooDeep);
            }
            let decoded =
                percent::decode_strict(&layer).map_err(|_| Rejection::MalformedEncoding)?;
            check_layer(&decoded)?;
            layer = Cow::Owned(decoded);
            depth += 1;
        }

        Ok(trimmed)
    }

    /// `true` only if the candidate is safe as an internal redirect.
    pub fn is_valid(candidate: Option<&str>) -> bool {
        Self::check(candidate).is_ok()
    }
}

/// Whether `candidate` is safe to use as an internal redirect target.
///
/// Absent, blank, external, scheme-bearing and malformed candidates are all
/// rejected; this never panics.
pub fn is_valid_redirect(candidate: Option<&str>) -> bool {
    RedirectValidator::is_valid(candidate)
}

/// Structural checks applied to the raw candidate and to each decoded layer.
fn check_layer(layer: &str) -> Result<(), Rejection> {
    let rest = layer.strip_prefix('/').ok_or(Rejection::NotPathAbsolute)?;

    if rest.starts_with('/') {
        return Err(Rejection::ProtocolRelative);
    }
    if rest.starts_with('\\') {
        return Err(Rejection::BackslashAuthority);
    }
    if layer.contains('\0') {
        return Err(Rejection::NullByte);
    }
    if layer.chars().any(|c| c.is_ascii_control()) {
        return Err(Rejection::ControlCharacter);
    }
    if has_dangerous_scheme(layer) {
        return Err(Rejection::DangerousScheme);
    }

    let segment_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if rest[..segment_end].contains(':') {
        return Err(Rejection::SchemeInLeadingSegment);
    }

    Ok(())
}

/// A dangerous `scheme:` that starts a scheme name anywhere except directly
/// after a `/`.
///
/// `/files/data:2024` and `/notes/bigdata:2024` keep their colon as a
/// filename character, while `/?next=javascript:alert(1)` is rejected.
fn has_dangerous_scheme(layer: &str) -> bool {
    // ASCII lowercasing keeps byte offsets stable.
    let lower = layer.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    DANGEROUS_SCHEMES.iter().any(|scheme| {
        let needle = format!("{scheme}:");
        lower
            .match_indices(needle.as_str())
            .any(|(at, _)| at == 0 || starts_scheme_name(bytes[at - 1]))
    })
}

/// Whether a scheme name can begin right after `prev`.
fn starts_scheme_name(prev: u8) -> bool {
    prev != b'/' && !(prev.is_ascii_alphanumeric() || matches!(prev, b'+' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str) -> Result<&str, Rejection> {
        RedirectValidator::check(Some(s))
    }

    /// Wrap `s` in `extra` additional percent-encoding layers.
    fn reencode(s: &str, extra: usize) -> String {
        (0..extra).fold(s.to_string(), |acc, _| acc.replace('%', "%25"))
    }

    #[test]
    fn accepts_internal_paths() {
        assert_eq!(check("/dashboard"), Ok("/dashboard"));
        assert_eq!(check("/lists/42/places"), Ok("/lists/42/places"));
        assert_eq!(check("/lists#top"), Ok("/lists#top"));
        assert_eq!(check("/"), Ok("/"));
        assert_eq!(check("/café"), Ok("/café"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(check("  /dashboard  "), Ok("/dashboard"));
        assert_eq!(check("\n/dashboard\t"), Ok("/dashboard"));
    }

    #[test]
    fn preserves_benign_encoded_content() {
        assert_eq!(
            check("/search?q=hello%20world"),
            Ok("/search?q=hello%20world")
        );
        assert_eq!(check("/a%2520b"), Ok("/a%2520b"));
    }

    #[test]
    fn rejects_absent_and_blank() {
        assert_eq!(RedirectValidator::check(None), Err(Rejection::Missing));
        assert_eq!(check(""), Err(Rejection::Empty));
        assert_eq!(check("   \t "), Err(Rejection::Empty));
    }

    #[test]
    fn rejects_absolute_urls_and_hostnames() {
        assert_eq!(check("https://evil.com"), Err(Rejection::NotPathAbsolute));
        assert_eq!(check("evil.com"), Err(Rejection::NotPathAbsolute));
        assert_eq!(check("javascript:alert(1)"), Err(Rejection::NotPathAbsolute));
        assert_eq!(check("dashboard"), Err(Rejection::NotPathAbsolute));
    }

    #[test]
    fn rejects_protocol_relative() {
        assert_eq!(check("//evil.com"), Err(Rejection::ProtocolRelative));
        assert_eq!(check("///evil.com"), Err(Rejection::ProtocolRelative));
        assert_eq!(check("  //evil.com"), Err(Rejection::ProtocolRelative));
    }

    #[test]
    fn rejects_backslash_authority() {
        assert_eq!(check("/\\evil.com"), Err(Rejection::BackslashAuthority));
        assert_eq!(check("/%5cevil.com"), Err(Rejection::BackslashAuthority));
    }

    #[test]
    fn rejects_encoded_protocol_relative() {
        assert_eq!(check("/%2f%2fevil.com"), Err(Rejection::ProtocolRelative));
        assert_eq!(check("/%2F/evil.com"), Err(Rejection::ProtocolRelative));
    }

    #[test]
    fn rejects_double_encoded_protocol_relative() {
        assert_eq!(check("/%252f%252fevil.com"), Err(Rejection::ProtocolRelative));
    }

    #[test]
    fn colon_after_path_separator_is_a_filename_character() {
        assert_eq!(check("/path/to/file:name"), Ok("/path/to/file:name"));
        assert_eq!(check("/files/data:2024"), Ok("/files/data:2024"));
        assert_eq!(check("/path/to/metadata:x"), Ok("/path/to/metadata:x"));
        assert_eq!(check("/notes/bigdata:2024"), Ok("/notes/bigdata:2024"));
        assert_eq!(check("/search?q=metadata:foo"), Ok("/search?q=metadata:foo"));
        assert_eq!(check("/a/x-vbscript:1"), Ok("/a/x-vbscript:1"));
    }

    #[test]
    fn rejects_scheme_in_leading_segment() {
        assert_eq!(
            check("/javascript:alert(1)"),
            Err(Rejection::SchemeInLeadingSegment)
        );
        assert_eq!(
            check("/JavaScript:alert(1)"),
            Err(Rejection::SchemeInLeadingSegment)
        );
        assert_eq!(check("/mailto:x@y.z"), Err(Rejection::SchemeInLeadingSegment));
        assert_eq!(check("/%6aavascript:x"), Err(Rejection::SchemeInLeadingSegment));
    }

    #[test]
    fn rejects_dangerous_scheme_in_query() {
        assert_eq!(
            check("/?next=javascript:alert(1)"),
            Err(Rejection::DangerousScheme)
        );
        assert_eq!(
            check("/lists?u=DATA:text/html,x"),
            Err(Rejection::DangerousScheme)
        );
        assert_eq!(
            check("/a#VBScript:msgbox(1)"),
            Err(Rejection::DangerousScheme)
        );
    }

    #[test]
    fn rejects_encoded_dangerous_scheme() {
        assert_eq!(
            check("/?x=%6Aavascript%3Aalert(1)"),
            Err(Rejection::DangerousScheme)
        );
        assert_eq!(
            check("/?x=javascript%253Aalert(1)"),
            Err(Rejection::DangerousScheme)
        );
    }

    #[test]
    fn rejects_null_byte() {
        assert_eq!(check("/a\0b"), Err(Rejection::NullByte));
        assert_eq!(check("/%00admin"), Err(Rejection::NullByte));
        assert_eq!(check("/%2500admin"), Err(Rejection::NullByte));
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(check("/\t/evil.com"), Err(Rejection::ControlCharacter));
        assert_eq!(check("/%09/evil.com"), Err(Rejection::ControlCharacter));
        assert_eq!(check("/a?%0d%0aSet-Cookie:x"), Err(Rejection::ControlCharacter));
    }

    #[test]
    fn rejects_malformed_encoding() {
        assert_eq!(check("/%zz"), Err(Rejection::MalformedEncoding));
        assert_eq!(check("/%C3"), Err(Rejection::MalformedEncoding));
        assert_eq!(check("/100%"), Err(Rejection::MalformedEncoding));
        // A literal `%` leaves a layer that no longer decodes.
        assert_eq!(check("/search?q=100%25"), Err(Rejection::MalformedEncoding));
    }

    #[test]
    fn decode_depth_is_capped() {
        let within = reencode("/a%20", MAX_DECODE_DEPTH - 1);
        assert!(check(&within).is_ok());

        let beyond = reencode("/a%20", MAX_DECODE_DEPTH);
        assert_eq!(check(&beyond), Err(Rejection::EncodingTooDeep));
    }

    #[test]
    fn extra_encoding_layers_never_bypass() {
        for hostile in ["/%2f%2fevil.com", "/?x=%6Aavascript%3Aalert(1)", "/%00"] {
            for extra in 0..4 {
                let wrapped = reencode(hostile, extra);
                assert!(
                    check(&wrapped).is_err(),
                    "{wrapped:?} should be rejected"
                );
            }
        }
    }

    #[test]
    fn free_function_matches_validator() {
        assert!(is_valid_redirect(Some("/dashboard")));
        assert!(!is_valid_redirect(Some("//evil.com")));
        assert!(!is_valid_redirect(None));
    }
}
