//! ASON serializer: recursive descent over an interchange value, deriving
//! indentation from nesting depth.
//!
//! The grammar has no way to say "the root is directly a map", so a map
//! root is wrapped in a synthetic `-` anonymous-map line; a list root and
//! a scalar root render bare. Empty containers keep their marker line and
//! simply have no children: a `-key`/`.key` entry or a lone `-`/`.`
//! element.

use crate::encode::writer::LineWriter;
use crate::escape;
use crate::value::Value;

pub fn stringify(value: &Value) -> String {
    let mut w = LineWriter::new();
    match value {
        Value::List(items) => write_list(items, &mut w, 0),
        Value::Map(entries) => {
            w.line(0, "-");
            write_map(entries, &mut w, 1);
        }
        scalar => w.line(0, &escape::encode_scalar(scalar)),
    }
    w.into_string()
}

fn write_list(items: &[Value], w: &mut LineWriter, level: usize) {
    for item in items {
        match item {
            Value::List(inner) => {
                w.line(level, ".");
                write_list(inner, w, level + 1);
            }
            Value::Map(entries) => {
                w.line(level, "-");
                write_map(entries, w, level + 1);
            }
            scalar => w.line(level, &escape::encode_scalar(scalar)),
        }
    }
}

fn write_map(entries: &[(String, Value)], w: &mut LineWriter, level: usize) {
    for (key, value) in entries {
        let key = escape::encode_key(key);
        match value {
            Value::List(inner) => {
                w.line_marked(level, '.', &key);
                write_list(inner, w, level + 1);
            }
            Value::Map(inner) if inner.is_empty() => {
                // A bare key line would read as a missing separator; the
                // `-` marker makes the empty map explicit.
                w.line_marked(level, '-', &key);
            }
            Value::Map(inner) => {
                w.line(level, &key);
                write_map(inner, w, level + 1);
            }
            scalar => w.line_kv(level, &key, &escape::encode_scalar(scalar)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stringify;
    use crate::value::Value;

    #[test]
    fn scalar_root_renders_bare() {
        assert_eq!(stringify(&Value::String("hello".into())), "hello");
        assert_eq!(stringify(&Value::Number(5.0)), "5");
        assert_eq!(stringify(&Value::String("5".into())), "\\5");
    }

    #[test]
    fn map_root_gets_anonymous_marker() {
        let v = Value::Map(vec![("key".into(), Value::String("value".into()))]);
        assert_eq!(stringify(&v), "-\n key value");
    }

    #[test]
    fn list_root_renders_without_wrapper() {
        let v = Value::List(vec![
            Value::String("el1".into()),
            Value::String("el2".into()),
        ]);
        assert_eq!(stringify(&v), "el1\nel2");
    }

    #[test]
    fn nested_containers_indent_one_space_per_level() {
        let v = Value::Map(vec![(
            "key".into(),
            Value::List(vec![Value::Map(vec![(
                "key".into(),
                Value::List(vec![Value::String("el".into())]),
            )])]),
        )]);
        assert_eq!(stringify(&v), "-\n .key\n  -\n   .key\n    el");
    }

    #[test]
    fn empty_containers_keep_their_markers() {
        let v = Value::Map(vec![
            ("a".into(), Value::List(vec![])),
            ("b".into(), Value::Map(vec![])),
        ]);
        assert_eq!(stringify(&v), "-\n .a\n -b");

        let v = Value::List(vec![Value::List(vec![]), Value::Map(vec![])]);
        assert_eq!(stringify(&v), ".\n-");
    }

    #[test]
    fn keys_with_spaces_are_escaped() {
        let v = Value::Map(vec![("a key".into(), Value::String("v".into()))]);
        assert_eq!(stringify(&v), "-\n a\\ key v");
    }
}
