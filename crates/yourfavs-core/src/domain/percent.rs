//! Strict percent-decoding for redirect candidates.
//!
//! Unlike a lenient decoder, a malformed escape is an error here: a candidate
//! the browser and the validator might decode differently is not safe to
//! redirect to.

use thiserror::Error;

/// Why a percent-encoded string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedEncoding {
    /// `%` not followed by two hex digits.
    #[error("truncated or non-hex escape at byte {offset}")]
    BadEscape { offset: usize },

    /// The decoded bytes are not UTF-8.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Decode every `%XX` escape in `input` exactly once.
///
/// Fails on a truncated or non-hex escape, or when the decoded bytes are not
/// valid UTF-8. Characters outside escapes pass through unchanged.
pub fn decode_strict(input: &str) -> Result<String, MalformedEncoding> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b'%' {
            out.push(b);
            i += 1;
            continue;
        }

        let high = bytes.get(i + 1).copied().and_then(hex_digit);
        let low = bytes.get(i + 2).copied().and_then(hex_digit);
        match (high, low) {
            (Some(high), Some(low)) => {
                out.push(high << 4 | low);
                i += 3;
            }
            _ => return Err(MalformedEncoding::BadEscape { offset: i }),
        }
    }

    String::from_utf8(out).map_err(|_| MalformedEncoding::InvalidUtf8)
}

/// Whether another decoding pass is due.
///
/// Any `%` counts, well-formed or not: a lone `%` makes the next
/// [`decode_strict`] pass fail, which is what the validator wants.
pub fn has_escape(input: &str) -> bool {
    input.contains('%')
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
