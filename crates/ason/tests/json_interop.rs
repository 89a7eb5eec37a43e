//! JSON -> ASON conversion (serde_json parses, the serializer emits) and
//! full JSON -> ASON -> JSON trips.

use serde_json::json;

fn to_ason(json: &str) -> String {
    ason::json_to_ason(json).unwrap()
}

#[test]
fn object_becomes_anonymous_map() {
    assert_eq!(to_ason(r#"{"key":"value"}"#), "-\n key value");
}

#[test]
fn array_becomes_bare_list() {
    assert_eq!(to_ason(r#"["el1","el2"]"#), "el1\nel2");
}

#[test]
fn scalars_render_bare() {
    assert_eq!(to_ason("5"), "5");
    assert_eq!(to_ason("null"), "null");
    assert_eq!(to_ason(r#""plain""#), "plain");
    // A JSON string that looks like a primitive is protected.
    assert_eq!(to_ason(r#""true""#), "\\true");
}

#[test]
fn nested_object() {
    assert_eq!(
        to_ason(r#"{"a":[1,2],"b":{},"c":{"d":null}}"#),
        "-\n .a\n  1\n  2\n -b\n c\n  d null"
    );
}

#[test]
fn object_key_order_is_preserved() {
    assert_eq!(
        to_ason(r#"{"z":1,"a":2,"m":3}"#),
        "-\n z 1\n a 2\n m 3"
    );
}

#[test]
fn invalid_json_is_an_error() {
    assert!(ason::json_to_ason("{not json").is_err());
}

#[test]
fn json_round_trips_through_ason() {
    for text in [
        r#"{"key":[{"key":["el"]}]}"#,
        r#"[{"key1":"value1","sequence1":["el1","el2"]},"el2"]"#,
        r#"{"a":1,"b":[true,"x",null],"c":{"nested":"deep"}}"#,
        r#"[[],{},["a","b"]]"#,
        "5",
        "\"true\"",
    ] {
        let original: serde_json::Value = serde_json::from_str(text).unwrap();
        let ason_text = ason::json_to_ason(text).unwrap();
        let back = ason::ason_to_json(&ason_text, &ason::Options::default()).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&back).unwrap();
        assert_eq!(original, reparsed, "via ASON: {:?}", ason_text);
    }
}

#[test]
fn strings_with_structure_survive() {
    let original = json!({"multi line": "a\nb", "quote\"key": "va\\lue"});
    let ason_text = ason::json_to_ason(&original.to_string()).unwrap();
    let back: serde_json::Value = serde_json::from_str(
        &ason::ason_to_json(&ason_text, &ason::Options::default()).unwrap(),
    )
    .unwrap();
    assert_eq!(original, back);
}
