//! jptr core - JSON Pointer (RFC 6901) addressing
//!
//! This crate resolves and updates locations inside already-decoded JSON
//! documents, with no I/O dependencies. It includes:
//!
//! - Reference token escaping (`~0`, `~1`)
//! - The [`Pointer`] value type: build, parse, split
//! - The [`Document`] tree and read/write traversal over it
//! - The same traversal over `serde_json::Value`
//! - Error types
//! - Parsing limits
//!
//! ```
//! use jptr_core::{Document, Pointer};
//! use serde_json::json;
//!
//! let doc = Document::from(json!({"foo": ["bar", "baz"]}));
//! let ptr: Pointer = "/foo/0".parse().unwrap();
//! assert_eq!(ptr.get(&doc).unwrap(), &Document::from("bar"));
//!
//! let doc = Pointer::build(["foo", "-"]).set(&doc, Document::from("qux")).unwrap();
//! assert_eq!(Pointer::build(["foo", "2"]).get(&doc).unwrap(), &Document::from("qux"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod document;
pub mod error;
pub mod escape;
pub mod limits;
pub mod mutate;
pub mod pointer;
pub mod resolve;
pub mod value;

// Re-export commonly used types
pub use document::{Document, Kind, Scalar};
pub use error::{Access, PointerError, Result};
pub use escape::{decode, encode};
pub use limits::Limits;
pub use mutate::{set, set_in_place};
pub use pointer::{build, split, Pointer, Tokens};
pub use resolve::get;
pub use value::{get_value, set_value};
