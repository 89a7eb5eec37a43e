//! stringify -> parse round trips over the interchange value. Map keys and
//! list elements must come back in the original order.
//!
//! One known collision is avoided here: a root list whose only element is
//! a non-list shares its encoding with that bare element (root collapsing),
//! so such values are not distinguishable by design.

use ason::Value;

fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn round_trip(v: &Value) {
    let text = ason::stringify(v);
    let back = ason::parse(&text).unwrap();
    assert_eq!(&back, v, "ASON text was: {:?}", text);
}

#[test]
fn scalar_roots() {
    round_trip(&Value::Null);
    round_trip(&Value::Bool(true));
    round_trip(&Value::Bool(false));
    round_trip(&Value::Number(0.0));
    round_trip(&Value::Number(-12.5));
    round_trip(&Value::String("hello world".into()));
}

#[test]
fn primitive_lookalike_strings() {
    round_trip(&Value::String("true".into()));
    round_trip(&Value::String("null".into()));
    round_trip(&Value::String("5".into()));
    round_trip(&Value::String("-0.5e3".into()));
    round_trip(&Value::String("\\true".into()));
    round_trip(&Value::String("\\\\42".into()));
}

#[test]
fn flat_map() {
    round_trip(&map(vec![
        ("a", Value::String("x".into())),
        ("b", Value::Number(2.0)),
        ("c", Value::Bool(false)),
        ("d", Value::Null),
    ]));
}

#[test]
fn flat_list() {
    round_trip(&Value::List(vec![
        Value::String("el1".into()),
        Value::Number(-5.0),
        Value::Bool(true),
        Value::Null,
    ]));
}

#[test]
fn nested_structures() {
    round_trip(&map(vec![
        ("key1", Value::String("value1".into())),
        (
            "sequence1",
            Value::List(vec![Value::String("el1".into()), Value::String("el2".into())]),
        ),
        (
            "map2",
            map(vec![
                ("key3", Value::String("value3".into())),
                (
                    "sequence2",
                    Value::List(vec![Value::List(vec![Value::Number(1.0)])]),
                ),
            ]),
        ),
    ]));
}

#[test]
fn empty_containers() {
    round_trip(&Value::Map(vec![]));
    round_trip(&Value::List(vec![]));
    round_trip(&map(vec![
        ("empty_list", Value::List(vec![])),
        ("empty_map", Value::Map(vec![])),
    ]));
    round_trip(&Value::List(vec![
        Value::List(vec![]),
        Value::Map(vec![]),
    ]));
}

#[test]
fn keys_needing_escapes() {
    round_trip(&map(vec![
        ("a key with spaces", Value::String("v".into())),
        ("tab\there", Value::Number(1.0)),
        ("back\\slash", Value::Bool(true)),
    ]));
}

#[test]
fn values_needing_escapes() {
    round_trip(&map(vec![
        ("nl", Value::String("line1\nline2".into())),
        ("cr", Value::String("a\rb".into())),
        ("tab", Value::String("a\tb".into())),
        ("bs", Value::String("a\\b".into())),
    ]));
}

#[test]
fn map_key_order_is_preserved() {
    let v = map(vec![
        ("z", Value::Number(1.0)),
        ("a", Value::Number(2.0)),
        ("m", Value::Number(3.0)),
    ]);
    let back = ason::parse(&ason::stringify(&v)).unwrap();
    match back {
        Value::Map(entries) => {
            let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, vec!["z", "a", "m"]);
        }
        other => panic!("expected a map, got {:?}", other),
    }
}

#[test]
fn multi_element_root_list_survives() {
    round_trip(&Value::List(vec![
        map(vec![("key", Value::String("value".into()))]),
        Value::String("el2".into()),
    ]));
}

#[test]
fn root_list_of_one_list_survives() {
    // A lone sequence child does not trigger root collapsing.
    round_trip(&Value::List(vec![Value::List(vec![Value::String(
        "el".into(),
    )])]));
}
