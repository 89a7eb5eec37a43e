//! JSON emitter: semantic token stream to JSON text.
//!
//! This is original emission code; serde_json is only ever used on the
//! parsing side of the JSON boundary. Brackets are pushed and popped in
//! lockstep with a context stack seeded with the root sequence, and a
//! comma is due before a token whenever the previous one completed an
//! element. Root collapsing: a document whose root sequence holds exactly
//! one non-sequence child is equivalent to that child alone, so the
//! wrapping brackets are stripped after emission.

use crate::decode::tokenizer::{Context, Token};
use crate::escape;

pub fn emit(tokens: &[Token], pretty: bool) -> String {
    let mut out = String::from("[");
    let mut contexts = vec![Context::Sequence];
    let mut last: Option<&Token> = None;
    // Call-scoped accumulators for the root-collapsing rule: direct
    // children of the root, split by kind.
    let mut root_map_or_value = 0usize;
    let mut root_sequences = 0usize;

    if pretty {
        newline_indent(&mut out, 0);
    }
    for token in tokens {
        if comma_due(last) && !matches!(token, Token::LevelPop(_)) {
            out.push(',');
            if pretty {
                newline_indent(&mut out, contexts.len() - 1);
            }
        }
        let at_root = contexts.len() == 1;
        match token {
            Token::LevelPop(count) => {
                for _ in 0..*count {
                    close_context(&mut out, contexts.pop());
                }
            }
            Token::Value(raw) => {
                if at_root {
                    root_map_or_value += 1;
                }
                out.push_str(&escape::value_to_json_fragment(raw));
            }
            Token::Key(key) => {
                out.push_str(&escape::key_to_json_fragment(key));
                out.push(':');
            }
            Token::MapKey(key) => {
                out.push_str(&escape::key_to_json_fragment(key));
                out.push_str(":{");
                contexts.push(Context::Map);
                if pretty {
                    newline_indent(&mut out, contexts.len() - 1);
                }
            }
            Token::SequenceKey(key) => {
                out.push_str(&escape::key_to_json_fragment(key));
                out.push_str(":[");
                contexts.push(Context::Sequence);
                if pretty {
                    newline_indent(&mut out, contexts.len() - 1);
                }
            }
            Token::AnonymousMapStart => {
                if at_root {
                    root_map_or_value += 1;
                }
                out.push('{');
                contexts.push(Context::Map);
                if pretty {
                    newline_indent(&mut out, contexts.len() - 1);
                }
            }
            Token::SequenceStart => {
                if at_root {
                    root_sequences += 1;
                }
                out.push('[');
                contexts.push(Context::Sequence);
                if pretty {
                    newline_indent(&mut out, contexts.len() - 1);
                }
            }
            Token::MapKeyEmptyMap(key) => {
                out.push_str(&escape::key_to_json_fragment(key));
                out.push_str(":{}");
            }
            Token::MapKeyEmptySequence(key) => {
                out.push_str(&escape::key_to_json_fragment(key));
                out.push_str(":[]");
            }
            Token::SequenceElementEmptyMap => {
                if at_root {
                    root_map_or_value += 1;
                }
                out.push_str("{}");
            }
            Token::SequenceElementEmptySequence => {
                if at_root {
                    root_sequences += 1;
                }
                out.push_str("[]");
            }
        }
        last = Some(token);
    }
    while let Some(context) = contexts.pop() {
        close_context(&mut out, Some(context));
    }

    if root_map_or_value == 1 && root_sequences == 0 {
        collapse_root(out, pretty)
    } else {
        out
    }
}

/// A comma separates elements; it is due whenever the previous token
/// finished one (a value, an empty container, or a block close).
fn comma_due(last: Option<&Token>) -> bool {
    matches!(
        last,
        Some(Token::Value(_))
            | Some(Token::MapKeyEmptyMap(_))
            | Some(Token::MapKeyEmptySequence(_))
            | Some(Token::SequenceElementEmptyMap)
            | Some(Token::SequenceElementEmptySequence)
            | Some(Token::LevelPop(_))
    )
}

fn close_context(out: &mut String, context: Option<Context>) {
    match context {
        Some(Context::Map) => out.push('}'),
        Some(Context::Sequence) => out.push(']'),
        None => {}
    }
}

fn newline_indent(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push(' ');
    }
}

/// Strip the root sequence's brackets (and, in pretty mode, the line feed
/// that followed the opener).
fn collapse_root(out: String, pretty: bool) -> String {
    let body = out.strip_prefix('[').unwrap_or(&out);
    let body = if pretty {
        body.strip_prefix('\n').unwrap_or(body)
    } else {
        body
    };
    let body = body.strip_suffix(']').unwrap_or(body);
    body.to_string()
}
