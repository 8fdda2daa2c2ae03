//! Write traversal
//!
//! Writes never touch shared containers: each container on the written path
//! is copied on first write ([`Arc::make_mut`]) and everything else is shared
//! with the input. Intermediate steps only look up children, so the leaf
//! assignment is the single point where anything changes. A failed write
//! therefore leaves every document it was given exactly as it was.

use crate::constants::APPEND_MARKER;
use crate::document::Document;
use crate::error::{Access, PointerError, Result};
use crate::pointer::Pointer;
use crate::resolve::Step;
use std::sync::Arc;
use tracing::{debug, trace};

/// Return a new root equal to `document` with `value` written at `pointer`.
///
/// `document` is not modified. The pointer must name at least one token;
/// replacing the whole document is the caller's business.
pub fn set(document: &Document, pointer: &Pointer, value: Document) -> Result<Document> {
    let mut root = document.clone();
    set_in_place(&mut root, pointer, value)?;
    Ok(root)
}

/// Write `value` at `pointer` inside `document`.
///
/// Containers that `document` shares with other roots are copied before
/// being written; uniquely owned ones are updated directly. On error
/// `document` is unchanged.
pub fn set_in_place(document: &mut Document, pointer: &Pointer, value: Document) -> Result<()> {
    let tokens = pointer.split();
    let Some((leaf, parents)) = tokens.split_last() else {
        return Err(PointerError::EmptyPointerOnSet);
    };

    debug!(pointer = %pointer, kind = %value.kind(), "setting value");

    let mut current = document;
    for (depth, token) in parents.iter().enumerate() {
        current = descend(current, token, Step::new(pointer, depth))?;
    }
    assign(current, leaf, value, Step::new(pointer, parents.len()))
}

/// Mutable access to an existing child, copying `node` first if shared.
fn descend<'d>(node: &'d mut Document, token: &str, at: Step<'_>) -> Result<&'d mut Document> {
    trace!(token, kind = %node.kind(), "descend");

    match node {
        Document::Object(map) => {
            let len = map.len();
            if !map.contains_key(token) {
                return Err(at.key_not_found(token, len));
            }
            Arc::make_mut(map)
                .get_mut(token)
                .ok_or_else(|| at.key_not_found(token, len))
        }
        Document::Array(items) => {
            let len = items.len();
            let index = at.parse_index(token, len)?;
            if index >= len {
                return Err(at.out_of_range(index, len, Access::Read));
            }
            Ok(&mut Arc::make_mut(items)[index])
        }
        Document::Scalar(scalar) => Err(at.not_traversable(token, scalar.kind())),
    }
}

/// Bind `value` to `token` inside `container`.
fn assign(container: &mut Document, token: &str, value: Document, at: Step<'_>) -> Result<()> {
    trace!(token, kind = %container.kind(), "assign");

    match container {
        Document::Object(map) => {
            Arc::make_mut(map).insert(token.to_string(), value);
        }
        Document::Array(items) if token == APPEND_MARKER => {
            Arc::make_mut(items).push(value);
        }
        Document::Array(items) => {
            let len = items.len();
            let index = at.parse_index(token, len)?;
            if index >= len {
                return Err(at.out_of_range(index, len, Access::Write));
            }
            Arc::make_mut(items)[index] = value;
        }
        Document::Scalar(scalar) => return Err(at.not_traversable(token, scalar.kind())),
    }
    Ok(())
}
