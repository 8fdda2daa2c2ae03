//! Pointer resolution directly on `serde_json::Value`
//!
//! Same token rules and errors as [`crate::resolve`] and [`crate::mutate`],
//! for callers that keep the decoder's own tree instead of a [`Document`].
//!
//! [`Document`]: crate::document::Document

use crate::constants::APPEND_MARKER;
use crate::document::Kind;
use crate::error::{Access, PointerError, Result};
use crate::pointer::Pointer;
use crate::resolve::Step;
use serde_json::Value;
use std::mem;
use tracing::{debug, trace};

/// Return the value `pointer` addresses inside `value`.
pub fn get_value<'v>(value: &'v Value, pointer: &Pointer) -> Result<&'v Value> {
    debug!(pointer = %pointer, "resolving pointer in json value");

    let mut current = value;
    for (depth, token) in pointer.tokens().enumerate() {
        let at = Step::new(pointer, depth);
        trace!(depth, token = %token, kind = %Kind::from(current), "step");
        current = match current {
            Value::Object(map) => map
                .get(&token)
                .ok_or_else(|| at.key_not_found(&token, map.len()))?,
            Value::Array(items) => {
                let index = at.parse_index(&token, items.len())?;
                items
                    .get(index)
                    .ok_or_else(|| at.out_of_range(index, items.len(), Access::Read))?
            }
            scalar => return Err(at.not_traversable(&token, Kind::from(scalar))),
        };
    }
    Ok(current)
}

/// Write `new_value` at `pointer` inside `value`, returning the value it
/// replaced (`None` for a new key or an append).
///
/// Every step before the last is a plain lookup, so on error `value` is
/// unchanged.
pub fn set_value(value: &mut Value, pointer: &Pointer, new_value: Value) -> Result<Option<Value>> {
    let tokens = pointer.split();
    let Some((leaf, parents)) = tokens.split_last() else {
        return Err(PointerError::EmptyPointerOnSet);
    };

    debug!(pointer = %pointer, "setting value in json value");

    let mut current = value;
    for (depth, token) in parents.iter().enumerate() {
        let at = Step::new(pointer, depth);
        current = match current {
            Value::Object(map) => {
                let len = map.len();
                map.get_mut(token)
                    .ok_or_else(|| at.key_not_found(token, len))?
            }
            Value::Array(items) => {
                let len = items.len();
                let index = at.parse_index(token, len)?;
                items
                    .get_mut(index)
                    .ok_or_else(|| at.out_of_range(index, len, Access::Read))?
            }
            scalar => return Err(at.not_traversable(token, Kind::from(&*scalar))),
        };
    }

    let at = Step::new(pointer, parents.len());
    match current {
        Value::Object(map) => Ok(map.insert(leaf.clone(), new_value)),
        Value::Array(items) if leaf == APPEND_MARKER => {
            items.push(new_value);
            Ok(None)
        }
        Value::Array(items) => {
            let len = items.len();
            let index = at.parse_index(leaf, len)?;
            let slot = items
                .get_mut(index)
                .ok_or_else(|| at.out_of_range(index, len, Access::Write))?;
            Ok(Some(mem::replace(slot, new_value)))
        }
        scalar => Err(at.not_traversable(leaf, Kind::from(&*scalar))),
    }
}
