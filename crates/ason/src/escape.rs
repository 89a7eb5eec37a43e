//! Escaping/unescaping engine.
//!
//! ASON values are unquoted, so the grammar reserves two things: an
//! unescaped space separates a map key from its value, and value text that
//! looks like a JSON primitive (`null`, `true`, `false`, or a number) *is*
//! that primitive. A string that would be mistaken for a primitive is
//! protected with one leading backslash; everything else round-trips
//! through JSON-style two-character and `\uXXXX` escapes.

use crate::number::format_canonical_f64;
use crate::value::Value;

/// Splits `s` into its run of leading backslashes and the remainder, if the
/// remainder is a primitive literal (`null`/`true`/`false` or a token of
/// the JSON number grammar).
pub(crate) fn split_primitive(s: &str) -> Option<(usize, &str)> {
    let n = s.bytes().take_while(|&b| b == b'\\').count();
    let rest = &s[n..];
    if matches!(rest, "null" | "true" | "false") || is_json_number(rest) {
        Some((n, rest))
    } else {
        None
    }
}

/// Strict JSON number grammar: `-? (0 | [1-9][0-9]*) frac? exp?`.
fn is_json_number(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0usize;
    if b.first() == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(c) if c.is_ascii_digit() => {
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
        }
        _ => return false,
    }
    if b.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if matches!(b.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

/// ASON value text to native scalar.
///
/// Zero leading backslashes before a primitive literal parse as the
/// primitive itself; one or more strip exactly one backslash and leave the
/// remainder as a literal string. Anything else is unescaped.
pub(crate) fn decode_value(s: &str) -> Value {
    match split_primitive(s) {
        Some((0, lit)) => match lit {
            "null" => Value::Null,
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => lit
                .parse::<f64>()
                .map(Value::Number)
                .unwrap_or_else(|_| Value::String(lit.to_string())),
        },
        Some((_, _)) => Value::String(s[1..].to_string()),
        None => Value::String(unescape(s)),
    }
}

/// Native scalar to ASON value text. Inverse of [`decode_value`].
pub(crate) fn encode_scalar(v: &Value) -> String {
    match v {
        Value::Null => String::from("null"),
        Value::Bool(true) => String::from("true"),
        Value::Bool(false) => String::from("false"),
        Value::Number(n) => format_canonical_f64(*n),
        Value::String(s) => encode_string_value(s),
        Value::List(_) | Value::Map(_) => {
            debug_assert!(false, "encode_scalar called with a container");
            String::from("null")
        }
    }
}

fn encode_string_value(s: &str) -> String {
    // A string that would read back as a primitive gets one extra backslash.
    if split_primitive(s).is_some() {
        let mut out = String::with_capacity(s.len() + 1);
        out.push('\\');
        out.push_str(s);
        return out;
    }
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        escape_char_into(&mut out, ch, false, false);
    }
    out
}

/// Map keys additionally escape literal spaces, since an unescaped space is
/// the key/value separator.
pub(crate) fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        escape_char_into(&mut out, ch, true, true);
    }
    out
}

fn escape_char_into(out: &mut String, ch: char, escape_quote: bool, escape_space: bool) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '"' if escape_quote => out.push_str("\\\""),
        ' ' if escape_space => out.push_str("\\ "),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if is_control(c) => {
            use core::fmt::Write as _;
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
        c => out.push(c),
    }
}

/// Reverses both the JSON-style escapes and the key space escapes: `\ ` is
/// a literal space, the two-character JSON escapes and `\uXXXX` decode as
/// usual, and a backslash before any other character is dropped with the
/// character kept.
pub(crate) fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            None => break,
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => match read_hex4(&mut chars) {
                Some(code) => out.push(decode_code_unit(code, &mut chars)),
                None => out.push('u'),
            },
            // Covers '\\', '"', '/', '\ ', and the drop-the-backslash rule.
            Some(other) => out.push(other),
        }
    }
    out
}

fn read_hex4(chars: &mut core::str::Chars<'_>) -> Option<u32> {
    let mut probe = chars.clone();
    let mut code = 0u32;
    for _ in 0..4 {
        code = (code << 4) | probe.next()?.to_digit(16)?;
    }
    *chars = probe;
    Some(code)
}

/// UTF-16 code-unit semantics for `\uXXXX`: a high surrogate combines with
/// an immediately following `\uXXXX` low surrogate; a lone surrogate decays
/// to U+FFFD.
fn decode_code_unit(code: u32, chars: &mut core::str::Chars<'_>) -> char {
    if (0xD800..0xDC00).contains(&code) {
        let mut probe = chars.clone();
        if probe.next() == Some('\\') && probe.next() == Some('u') {
            if let Some(low) = read_hex4(&mut probe) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = probe;
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined).unwrap_or('\u{FFFD}');
                }
            }
        }
        return '\u{FFFD}';
    }
    char::from_u32(code).unwrap_or('\u{FFFD}')
}

/// Position of the first space not consumed by a backslash escape, i.e. the
/// key/value split point of a map entry line.
pub(crate) fn find_unescaped_space(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = 0usize;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            b' ' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// ASON value text to a JSON fragment: bare literal text for primitives,
/// a quoted JSON string literal otherwise.
pub(crate) fn value_to_json_fragment(raw: &str) -> String {
    match split_primitive(raw) {
        Some((0, _)) => raw.to_string(),
        Some((_, _)) => json_quote(&raw[1..]),
        None => json_quote(&unescape(raw)),
    }
}

pub(crate) fn key_to_json_fragment(key: &str) -> String {
    json_quote(key)
}

/// Standard JSON string literal, quotes included.
pub(crate) fn json_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        escape_char_into(&mut out, ch, true, false);
    }
    out.push('"');
    out
}

fn is_control(c: char) -> bool {
    let u = c as u32;
    u < 0x20 || u == 0x7F
}
