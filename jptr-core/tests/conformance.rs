//! RFC 6901 section 5 example document

use jptr_core::{get, get_value, set, Document, Pointer, PointerError};
use serde_json::{json, Value};

fn rfc_document() -> Value {
    json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    })
}

fn cases() -> Vec<(&'static str, Value)> {
    vec![
        ("/foo", json!(["bar", "baz"])),
        ("/foo/0", json!("bar")),
        ("/", json!(0)),
        ("/a~1b", json!(1)),
        ("/c%d", json!(2)),
        ("/e^f", json!(3)),
        ("/g|h", json!(4)),
        ("/i\\j", json!(5)),
        ("/k\"l", json!(6)),
        ("/ ", json!(7)),
        ("/m~0n", json!(8)),
    ]
}

#[test]
fn rfc_examples_resolve_on_document() {
    let document = Document::from(rfc_document());
    for (pointer, expected) in cases() {
        let pointer = Pointer::parse(pointer).unwrap();
        let result = get(&document, &pointer)
            .unwrap_or_else(|e| panic!("{pointer} failed: {e}"));
        assert_eq!(Value::from(result), expected, "pointer {pointer}");
    }
}

#[test]
fn rfc_examples_resolve_on_value() {
    let value = rfc_document();
    for (pointer, expected) in cases() {
        let pointer = Pointer::parse(pointer).unwrap();
        assert_eq!(get_value(&value, &pointer).unwrap(), &expected, "pointer {pointer}");
    }
}

#[test]
fn empty_pointer_is_the_whole_document() {
    let document = Document::from(rfc_document());
    let result = get(&document, &Pointer::root()).unwrap();
    assert!(std::ptr::eq(result, &document));
}

#[test]
fn built_pointers_match_rfc_strings() {
    assert_eq!(Pointer::build(["a/b"]).as_str(), "/a~1b");
    assert_eq!(Pointer::build(["m~n"]).as_str(), "/m~0n");
    assert_eq!(Pointer::build([""]).as_str(), "/");
    assert_eq!(Pointer::build(["foo", "0"]).as_str(), "/foo/0");
}

#[test]
fn key_literally_tilde_one() {
    let document = Document::from(json!({"~1": "tilde-one", "/": "slash"}));
    let pointer = Pointer::build(["~1"]);
    assert_eq!(pointer.as_str(), "/~01");
    assert_eq!(get(&document, &pointer).unwrap(), &Document::from("tilde-one"));
    assert_eq!(
        get(&document, &Pointer::parse("/~1").unwrap()).unwrap(),
        &Document::from("slash")
    );
}

#[test]
fn append_scenario() {
    let document = Document::from(json!({"array": [1, 2, 3]}));
    let updated = set(
        &document,
        &Pointer::parse("/array/-").unwrap(),
        Document::from(5i64),
    )
    .unwrap();
    assert_eq!(
        get(&updated, &Pointer::parse("/array/3").unwrap()).unwrap(),
        &Document::from(5i64)
    );
    assert_eq!(Value::from(&updated), json!({"array": [1, 2, 3, 5]}));
}

#[test]
fn malformed_pointer_text() {
    assert!(matches!(
        Pointer::parse("foo"),
        Err(PointerError::MalformedPointer { .. })
    ));
}
