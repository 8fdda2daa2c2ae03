//! Document model addressed by pointers
//!
//! A [`Document`] is a persistent tree: containers keep their children behind
//! [`Arc`], so cloning a document is cheap and a write copies only the
//! containers along the written path. Every untouched subtree stays shared
//! between the old and the new root.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Keyed children of an object node.
pub type Object = BTreeMap<String, Document>;

/// Ordered children of an array node.
pub type Array = Vec<Document>;

/// A tree-structured document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Mapping from unique string keys to documents
    Object(Arc<Object>),
    /// 0-based ordered sequence of documents
    Array(Arc<Array>),
    /// Opaque leaf, never traversed into
    Scalar(Scalar),
}

/// Leaf values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Any JSON number
    Number(Number),
    /// UTF-8 string
    String(String),
}

/// Shape of a node, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Object node
    Object,
    /// Array node
    Array,
    /// Null scalar
    Null,
    /// Boolean scalar
    Bool,
    /// Number scalar
    Number,
    /// String scalar
    String,
}

impl Kind {
    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&Value> for Kind {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl Scalar {
    /// Shape of this scalar
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Null => Kind::Null,
            Scalar::Bool(_) => Kind::Bool,
            Scalar::Number(_) => Kind::Number,
            Scalar::String(_) => Kind::String,
        }
    }
}

impl Document {
    /// `null` leaf
    pub fn null() -> Self {
        Document::Scalar(Scalar::Null)
    }

    /// Object node from key/value pairs; later duplicates win.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Document)>,
        K: Into<String>,
    {
        Document::Object(Arc::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Array node from items.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        Document::Array(Arc::new(items.into_iter().collect()))
    }

    /// Shape of this node
    pub fn kind(&self) -> Kind {
        match self {
            Document::Object(_) => Kind::Object,
            Document::Array(_) => Kind::Array,
            Document::Scalar(scalar) => scalar.kind(),
        }
    }

    /// Children of an object node
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Children of an array node
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Leaf value
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Document::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Whether both documents are the same container allocation.
    ///
    /// Scalars never share storage.
    pub fn shares_storage(&self, other: &Document) -> bool {
        match (self, other) {
            (Document::Object(a), Document::Object(b)) => Arc::ptr_eq(a, b),
            (Document::Array(a), Document::Array(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Scalar(Scalar::Null),
            Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Document::Scalar(Scalar::Number(n)),
            Value::String(s) => Document::Scalar(Scalar::String(s)),
            Value::Array(items) => Document::array(items.into_iter().map(Document::from)),
            Value::Object(map) => {
                Document::object(map.into_iter().map(|(k, v)| (k, Document::from(v))))
            }
        }
    }
}

impl From<&Document> for Value {
    fn from(document: &Document) -> Self {
        match document {
            Document::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
            Document::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Document::Scalar(Scalar::Null) => Value::Null,
            Document::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
            Document::Scalar(Scalar::Number(n)) => Value::Number(n.clone()),
            Document::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        }
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::from(&document)
    }
}

impl From<Scalar> for Document {
    fn from(scalar: Scalar) -> Self {
        Document::Scalar(scalar)
    }
}

impl From<bool> for Document {
    fn from(b: bool) -> Self {
        Document::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Document {
    fn from(n: i64) -> Self {
        Document::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u64> for Document {
    fn from(n: u64) -> Self {
        Document::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Document {
    /// Non-finite values become `null`, as in `serde_json`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Document::null(), |n| Document::Scalar(Scalar::Number(n)))
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::Scalar(Scalar::String(s))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Object(map) => (**map).serialize(serializer),
            Document::Array(items) => (**items).serialize(serializer),
            Document::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Document::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_from_and_to_value() {
        let value = json!({
            "foo": ["bar", 1, 2.5, true, null],
            "nested": {"k": "v"}
        });
        let document = Document::from(value.clone());
        assert_eq!(document.kind(), Kind::Object);
        assert_eq!(Value::from(&document), value);
    }

    #[test]
    fn serializes_like_value() {
        let value = json!({"a": [1, {"b": null}], "c": "d"});
        let document: Document = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            serde_json::to_string(&value).unwrap()
        );
    }

    #[test]
    fn kinds_and_accessors() {
        let document = Document::object([("a", Document::array([Document::from(1i64)]))]);
        assert!(document.as_object().is_some());
        assert!(document.as_array().is_none());
        let items = document.as_object().unwrap()["a"].as_array().unwrap();
        assert_eq!(items[0].kind(), Kind::Number);
        assert_eq!(Document::from("s").kind(), Kind::String);
        assert_eq!(Document::from(false).kind().to_string(), "boolean");
        assert_eq!(Document::null().as_scalar(), Some(&Scalar::Null));
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(Document::from(f64::NAN), Document::null());
    }

    #[test]
    fn clones_share_storage() {
        let document = Document::from(json!({"a": [1, 2]}));
        let copy = document.clone();
        assert!(document.shares_storage(&copy));
        assert!(!Document::null().shares_storage(&Document::null()));
    }
}
