//! JSON Pointer values
//!
//! A [`Pointer`] owns the wire form of a JSON Pointer (RFC 6901). The wire
//! form is either empty, addressing the whole document, or a sequence of
//! `/`-prefixed escaped reference tokens. Decoded tokens are produced on
//! demand by [`Pointer::tokens`].

use crate::constants::SEPARATOR;
use crate::document::Document;
use crate::error::{PointerError, Result};
use crate::escape::{decode, encode, needs_escaping, validate_escapes};
use crate::limits::Limits;
use crate::{mutate, resolve};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable JSON Pointer.
///
/// Equality, ordering and hashing are those of the wire string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pointer(String);

impl Pointer {
    /// The empty pointer, addressing the whole document.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Build a pointer from raw (unescaped) reference tokens.
    ///
    /// No tokens yields the root pointer.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pointer = Self::root();
        for token in tokens {
            pointer.push(token.as_ref());
        }
        pointer
    }

    /// Parse pointer text without limits.
    ///
    /// The only check is that non-empty text starts with `/`; escape
    /// sequences are decoded permissively.
    pub fn parse(pointer: &str) -> Result<Self> {
        check_leading_separator(pointer)?;
        Ok(Self(pointer.to_string()))
    }

    /// Parse untrusted pointer text, enforcing `limits`.
    pub fn parse_with(pointer: &str, limits: &Limits) -> Result<Self> {
        limits.validate()?;

        if pointer.len() > limits.max_pointer_length {
            return Err(PointerError::PointerTooLong {
                length: pointer.len(),
                max_length: limits.max_pointer_length,
            });
        }

        let parsed = Self::parse(pointer)?;

        let depth = parsed.len();
        if depth > limits.max_depth {
            return Err(PointerError::DepthLimitExceeded {
                depth,
                max_depth: limits.max_depth,
            });
        }

        if limits.strict_escapes {
            for (index, raw) in parsed.raw_tokens().enumerate() {
                validate_escapes(raw).map_err(|reason| PointerError::MalformedPointer {
                    pointer: pointer.to_string(),
                    reason: format!("token {index}: {reason}"),
                })?;
            }
        }

        Ok(parsed)
    }

    /// Wire form of the pointer.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty pointer.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Same as [`Pointer::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Number of reference tokens.
    pub fn len(&self) -> usize {
        self.0.matches(SEPARATOR).count()
    }

    /// Decoded reference tokens, in order.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens {
            inner: self.raw_tokens(),
        }
    }

    /// Decompose into decoded reference tokens.
    pub fn split(&self) -> Vec<String> {
        self.tokens().collect()
    }

    /// Append one raw reference token.
    pub fn push(&mut self, token: &str) {
        self.0.push(SEPARATOR);
        if needs_escaping(token) {
            self.0.push_str(&encode(token));
        } else {
            self.0.push_str(token);
        }
    }

    /// A new pointer with one more raw reference token.
    pub fn with_token(&self, token: &str) -> Self {
        let mut pointer = self.clone();
        pointer.push(token);
        pointer
    }

    /// Pointer to the container of the addressed location, `None` for root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind(SEPARATOR)
            .map(|idx| Self(self.0[..idx].to_string()))
    }

    /// Last decoded reference token, `None` for root.
    pub fn last(&self) -> Option<String> {
        self.0.rfind(SEPARATOR).map(|idx| decode(&self.0[idx + 1..]))
    }

    /// Concatenate `other` after this pointer.
    pub fn join(&self, other: &Pointer) -> Self {
        let mut wire = String::with_capacity(self.0.len() + other.0.len());
        wire.push_str(&self.0);
        wire.push_str(&other.0);
        Self(wire)
    }

    /// Resolve this pointer against `document`.
    pub fn get<'d>(&self, document: &'d Document) -> Result<&'d Document> {
        resolve::get(document, self)
    }

    /// A new document with `value` written at this pointer.
    pub fn set(&self, document: &Document, value: Document) -> Result<Document> {
        mutate::set(document, self, value)
    }

    /// Wire form of the first `depth` tokens.
    pub(crate) fn prefix(&self, depth: usize) -> &str {
        self.0
            .match_indices(SEPARATOR)
            .nth(depth)
            .map_or(self.0.as_str(), |(idx, _)| &self.0[..idx])
    }

    /// Escaped tokens as they appear in the wire form.
    fn raw_tokens(&self) -> RawTokens<'_> {
        RawTokens {
            inner: self.0.strip_prefix(SEPARATOR).map(|rest| rest.split(SEPARATOR)),
        }
    }
}

/// Build a pointer from raw reference tokens.
pub fn build<I, S>(tokens: I) -> Pointer
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Pointer::build(tokens)
}

/// Decompose a pointer into decoded reference tokens.
pub fn split(pointer: &Pointer) -> Vec<String> {
    pointer.split()
}

fn check_leading_separator(pointer: &str) -> Result<()> {
    if !pointer.is_empty() && !pointer.starts_with(SEPARATOR) {
        return Err(PointerError::MalformedPointer {
            pointer: pointer.to_string(),
            reason: "pointer must start with '/' (or be empty for the whole document)".to_string(),
        });
    }
    Ok(())
}

struct RawTokens<'a> {
    inner: Option<std::str::Split<'a, char>>,
}

impl<'a> Iterator for RawTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

/// Iterator over the decoded tokens of a [`Pointer`]
pub struct Tokens<'a> {
    inner: RawTokens<'a>,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(decode)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pointer {
    type Error = PointerError;

    fn try_from(value: String) -> Result<Self> {
        check_leading_separator(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Pointer> for String {
    fn from(pointer: Pointer) -> Self {
        pointer.0
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
