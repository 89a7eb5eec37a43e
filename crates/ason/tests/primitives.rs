//! Primitive disambiguation end to end: unquoted value text that matches
//! `null`/`true`/`false` or the JSON number grammar is that primitive; one
//! leading backslash protects a lookalike string, and re-encoding must
//! reproduce the original ASON text.

use ason::{Options, Value};

fn to_json(input: &str) -> String {
    ason::ason_to_json(input, &Options::default()).unwrap()
}

#[test]
fn bare_primitives_decode_as_primitives() {
    assert_eq!(ason::parse("true").unwrap(), Value::Bool(true));
    assert_eq!(ason::parse("false").unwrap(), Value::Bool(false));
    assert_eq!(ason::parse("null").unwrap(), Value::Null);
    assert_eq!(ason::parse("5").unwrap(), Value::Number(5.0));
    assert_eq!(ason::parse("-0.5e2").unwrap(), Value::Number(-50.0));
}

#[test]
fn escaped_primitives_decode_as_strings() {
    assert_eq!(ason::parse("\\true").unwrap(), Value::String("true".into()));
    assert_eq!(ason::parse("\\5").unwrap(), Value::String("5".into()));
    assert_eq!(
        ason::parse("\\\\null").unwrap(),
        Value::String("\\null".into())
    );
}

#[test]
fn reencoding_reproduces_the_ason_text() {
    for text in ["true", "\\true", "null", "\\null", "5", "\\5", "-1.25"] {
        let value = ason::parse(text).unwrap();
        assert_eq!(ason::stringify(&value), text);
    }
}

#[test]
fn number_grammar_is_json_number_grammar() {
    // Leading zeros, bare dots, and dangling exponents are not numbers.
    assert_eq!(ason::parse("05").unwrap(), Value::String("05".into()));
    assert_eq!(ason::parse("1.").unwrap(), Value::String("1.".into()));
    assert_eq!(ason::parse("1e").unwrap(), Value::String("1e".into()));
    assert_eq!(ason::parse("+5").unwrap(), Value::String("+5".into()));
    assert_eq!(to_json("05"), "\"05\"");
}

#[test]
fn primitives_in_json_output() {
    assert_eq!(to_json("-\n a true\n b \\true\n c 5"), r#"{"a":true,"b":"true","c":5}"#);
}

#[test]
fn number_text_is_passed_through_verbatim() {
    // The emitter keeps the source spelling of numbers.
    assert_eq!(to_json("5.0"), "5.0");
    assert_eq!(to_json("1e3"), "1e3");
}
