//! Reference token escaping (RFC 6901 section 3)
//!
//! - `~` is written as `~0`
//! - `/` is written as `~1`

use crate::constants::{ESCAPE, ESCAPED_ESCAPE, ESCAPED_SEPARATOR, SEPARATOR};

/// Escape a raw reference token into its wire form.
pub fn encode(token: &str) -> String {
    // `~` must go first, otherwise the `~` introduced by `~1` gets escaped again
    token
        .replace(ESCAPE, ESCAPED_ESCAPE)
        .replace(SEPARATOR, ESCAPED_SEPARATOR)
}

/// Unescape a wire-form reference token.
///
/// Never fails: a `~` that is not followed by `0` or `1` stays a literal `~`.
/// Use [`validate_escapes`] first when that laxness is unwanted.
pub fn decode(token: &str) -> String {
    // `~1` must go first so that `~01` decodes to `~1` and not `/`
    token
        .replace(ESCAPED_SEPARATOR, "/")
        .replace(ESCAPED_ESCAPE, "~")
}

/// Check that every `~` in a wire-form token starts a `~0` or `~1` sequence.
///
/// The error names the offending sequence and its byte offset in `token`.
pub fn validate_escapes(token: &str) -> Result<(), String> {
    for (offset, _) in token.match_indices(ESCAPE) {
        match token[offset + 1..].chars().next() {
            Some('0') | Some('1') => {}
            Some(other) => {
                return Err(format!(
                    "invalid escape sequence '~{other}' at byte {offset} of \"{token}\" \
                     (only '~0' and '~1' are defined)"
                ));
            }
            None => {
                return Err(format!(
                    "incomplete escape sequence at end of \"{token}\" \
                     (only '~0' and '~1' are defined)"
                ));
            }
        }
    }
    Ok(())
}

/// Whether a raw token needs escaping at all.
pub fn needs_escaping(token: &str) -> bool {
    token.contains([ESCAPE, SEPARATOR])
}
