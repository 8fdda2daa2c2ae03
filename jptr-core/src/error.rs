//! Error types for pointer parsing and traversal

use crate::document::Kind;
use std::fmt;
use thiserror::Error;

/// Whether a failed array access was a read or a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Resolving an existing element.
    Read,
    /// Overwriting an existing element.
    Write,
}

impl Access {
    /// Suffix appended to out-of-range messages.
    ///
    /// Only writes can grow an array, through the append marker.
    pub fn hint(self) -> &'static str {
        match self {
            Access::Read => "",
            Access::Write => "; use the index \"-\" to append a new element",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

/// jptr error types
///
/// `location` fields hold the wire form of the pointer prefix that addresses
/// the container where the failing step happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointerError {
    /// Non-empty pointer text that does not start with `/`, or (in strict
    /// mode) a token with a bad escape sequence.
    #[error("Malformed JSON Pointer '{pointer}': {reason}")]
    MalformedPointer {
        /// The offending pointer text
        pointer: String,
        /// Why it was rejected
        reason: String,
    },

    /// Object lookup with an absent key.
    #[error("Key \"{token}\" not found in object at '{location}' ({len} keys)")]
    KeyNotFound {
        /// Decoded key that was looked up
        token: String,
        /// Pointer to the object
        location: String,
        /// Number of keys the object holds
        len: usize,
    },

    /// Array token that is not an unsigned decimal integer.
    #[error(
        "Invalid array index \"{token}\" at '{location}': expected an unsigned decimal integer \
         (array has {len} elements)"
    )]
    InvalidIndexToken {
        /// Decoded token
        token: String,
        /// Pointer to the array
        location: String,
        /// Length of the array
        len: usize,
    },

    /// The append marker used where an existing element is required.
    #[error(
        "Index \"-\" at '{location}' names the element after the last one and cannot be read \
         (array has {len} elements)"
    )]
    AppendNotReadable {
        /// Pointer to the array
        location: String,
        /// Length of the array
        len: usize,
    },

    /// Array index at or past the end of the array.
    #[error(
        "Index {index} out of range at '{location}', array only has {len} elements{}",
        .access.hint()
    )]
    IndexOutOfRange {
        /// Parsed index
        index: usize,
        /// Length of the array
        len: usize,
        /// Pointer to the array
        location: String,
        /// Read or write
        access: Access,
    },

    /// A token remains but the current value is a scalar.
    #[error("Cannot access \"{token}\" at '{location}': value is {kind}, not an object or array")]
    NotTraversable {
        /// Decoded token that could not be applied
        token: String,
        /// Pointer to the scalar
        location: String,
        /// Kind of scalar found
        kind: Kind,
    },

    /// `set` called with the root pointer.
    #[error("Setting a value requires a pointer with at least one reference token")]
    EmptyPointerOnSet,

    /// Pointer text longer than the configured limit.
    #[error("Pointer too long: {length} bytes (max: {max_length})")]
    PointerTooLong {
        /// Length of the pointer text in bytes
        length: usize,
        /// Configured maximum
        max_length: usize,
    },

    /// Pointer with more tokens than the configured limit.
    #[error("Pointer depth limit exceeded: {depth} tokens (max: {max_depth})")]
    DepthLimitExceeded {
        /// Token count of the pointer
        depth: usize,
        /// Configured maximum
        max_depth: usize,
    },

    /// Configured limits above the hard maximums.
    #[error("Configuration exceeds hard limits: {reason}")]
    ConfigurationExceedsHardLimits {
        /// Which limit was exceeded
        reason: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PointerError>;
