//! Read traversal

use crate::constants::APPEND_MARKER;
use crate::document::{Document, Kind};
use crate::error::{Access, PointerError, Result};
use crate::pointer::Pointer;
use tracing::{debug, trace};

/// Return the value `pointer` addresses inside `document`.
///
/// The root pointer returns `document` itself. Traversal stops at the first
/// failing token.
pub fn get<'d>(document: &'d Document, pointer: &Pointer) -> Result<&'d Document> {
    debug!(pointer = %pointer, "resolving pointer");

    let mut current = document;
    for (depth, token) in pointer.tokens().enumerate() {
        current = step(current, &token, Step::new(pointer, depth))?;
    }
    Ok(current)
}

/// Apply one token to `current` (object key or existing array index).
pub(crate) fn step<'d>(current: &'d Document, token: &str, at: Step<'_>) -> Result<&'d Document> {
    trace!(depth = at.depth, token, kind = %current.kind(), "step");

    match current {
        Document::Object(map) => map
            .get(token)
            .ok_or_else(|| at.key_not_found(token, map.len())),
        Document::Array(items) => {
            let index = at.parse_index(token, items.len())?;
            items
                .get(index)
                .ok_or_else(|| at.out_of_range(index, items.len(), Access::Read))
        }
        Document::Scalar(scalar) => Err(at.not_traversable(token, scalar.kind())),
    }
}

/// Position of a traversal step, used to build diagnostics
#[derive(Clone, Copy)]
pub(crate) struct Step<'p> {
    pointer: &'p Pointer,
    depth: usize,
}

impl<'p> Step<'p> {
    pub(crate) fn new(pointer: &'p Pointer, depth: usize) -> Self {
        Self { pointer, depth }
    }

    fn location(&self) -> String {
        self.pointer.prefix(self.depth).to_string()
    }

    /// Parse an array token naming an existing element.
    ///
    /// Digits only: no sign, no whitespace, no append marker.
    pub(crate) fn parse_index(&self, token: &str, len: usize) -> Result<usize> {
        if token == APPEND_MARKER {
            return Err(PointerError::AppendNotReadable {
                location: self.location(),
                len,
            });
        }
        let invalid = || PointerError::InvalidIndexToken {
            token: token.to_string(),
            location: self.location(),
            len,
        };
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        token.parse::<usize>().map_err(|_| invalid())
    }

    pub(crate) fn key_not_found(&self, token: &str, len: usize) -> PointerError {
        PointerError::KeyNotFound {
            token: token.to_string(),
            location: self.location(),
            len,
        }
    }

    pub(crate) fn out_of_range(&self, index: usize, len: usize, access: Access) -> PointerError {
        PointerError::IndexOutOfRange {
            index,
            len,
            location: self.location(),
            access,
        }
    }

    pub(crate) fn not_traversable(&self, token: &str, kind: Kind) -> PointerError {
        PointerError::NotTraversable {
            token: token.to_string(),
            location: self.location(),
            kind,
        }
    }
}
