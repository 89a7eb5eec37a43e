//! Structural tokenizer: shift tokens to semantic ASON tokens.
//!
//! A context stack of map/sequence markers disambiguates what a content
//! line means; the root context is a sequence (documents are implicitly
//! wrapped in a root sequence until the emitters apply root collapsing).
//! One token of lookahead decides whether a line introduces a nested
//! block: a content line followed by an indent increase is a key or
//! sequence-element marker, and the indent token is consumed with it
//! because the semantic token itself conveys the bracket opening.

use crate::decode::scanner::ShiftToken;
use crate::error::{Error, Result};
use crate::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Map,
    Sequence,
}

/// Semantic token stream. Key bodies are fully unescaped; value bodies
/// carry the raw ASON value text, decoded by the consuming stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Map entry whose value is a nested map: `key` + indented block.
    MapKey(String),
    /// Map entry whose value is a nested sequence: `.key` + indented block.
    SequenceKey(String),
    /// Key half of an inline `key value` entry.
    Key(String),
    /// Scalar value text (inline entry value or sequence element).
    Value(String),
    /// `-` sequence element introducing a nested map.
    AnonymousMapStart,
    /// `.` sequence element introducing a nested sequence.
    SequenceStart,
    /// `-key` map entry with an empty map value.
    MapKeyEmptyMap(String),
    /// `.key` map entry with an empty sequence value.
    MapKeyEmptySequence(String),
    /// Lone `-` sequence element with no nested block.
    SequenceElementEmptyMap,
    /// Lone `.` sequence element with no nested block.
    SequenceElementEmptySequence,
    /// Close this many nesting levels.
    LevelPop(usize),
}

pub fn tokenize(shift_tokens: &[ShiftToken<'_>], strict: bool) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut contexts = vec![Context::Sequence];

    let mut i = 0usize;
    while i < shift_tokens.len() {
        match &shift_tokens[i] {
            // Only the very first line produces an indent with no preceding
            // content; mid-stream increases are consumed via lookahead.
            ShiftToken::Indent => {}
            ShiftToken::Dedent(count) => {
                let open = contexts.len() - 1;
                let popped = if *count > open {
                    if strict {
                        return Err(Error::UnbalancedIndent {
                            line: line_of_next_content(shift_tokens, i),
                        });
                    }
                    open
                } else {
                    *count
                };
                contexts.truncate(contexts.len() - popped);
                if popped > 0 {
                    tokens.push(Token::LevelPop(popped));
                }
            }
            ShiftToken::Content { text, line } => {
                let content = *text;
                let line = *line;
                if strict {
                    validate_line(content, line)?;
                }
                let opens_block = matches!(shift_tokens.get(i + 1), Some(ShiftToken::Indent));
                match contexts.last().copied().unwrap_or(Context::Sequence) {
                    Context::Map => {
                        tokenize_map_line(content, line, opens_block, strict, &mut tokens, &mut contexts)?
                    }
                    Context::Sequence => {
                        tokenize_sequence_line(content, line, opens_block, strict, &mut tokens, &mut contexts)?
                    }
                }
                if opens_block {
                    // The indent increase belongs to the opener just
                    // emitted; skip it rather than reprocess it.
                    i += 1;
                }
            }
        }
        i += 1;
    }
    Ok(tokens)
}

fn tokenize_map_line(
    content: &str,
    line: usize,
    opens_block: bool,
    strict: bool,
    tokens: &mut Vec<Token>,
    contexts: &mut Vec<Context>,
) -> Result<()> {
    if opens_block {
        if let Some(key) = content.strip_prefix('.') {
            if strict && key.is_empty() {
                return Err(Error::EmptyKey { line });
            }
            tokens.push(Token::SequenceKey(escape::unescape(key)));
            contexts.push(Context::Sequence);
        } else {
            if strict && content.is_empty() {
                return Err(Error::EmptyKey { line });
            }
            tokens.push(Token::MapKey(escape::unescape(content)));
            contexts.push(Context::Map);
        }
        return Ok(());
    }
    if let Some(pos) = escape::find_unescaped_space(content) {
        let key = &content[..pos];
        let value = &content[pos + 1..];
        if strict && key.is_empty() {
            return Err(Error::EmptyKey { line });
        }
        if strict && value.is_empty() {
            return Err(Error::EmptyValue { line });
        }
        tokens.push(Token::Key(escape::unescape(key)));
        tokens.push(Token::Value(value.to_string()));
    } else if let Some(key) = content.strip_prefix('.') {
        if strict && key.is_empty() {
            return Err(Error::EmptyKey { line });
        }
        tokens.push(Token::MapKeyEmptySequence(escape::unescape(key)));
    } else if let Some(key) = content.strip_prefix('-') {
        if strict && key.is_empty() {
            return Err(Error::EmptyKey { line });
        }
        tokens.push(Token::MapKeyEmptyMap(escape::unescape(key)));
    } else {
        if strict {
            return Err(Error::MissingSeparator { line });
        }
        // Legacy map-key-element fallback: a bare word becomes a key with
        // an empty map value.
        tokens.push(Token::MapKeyEmptyMap(escape::unescape(content)));
    }
    Ok(())
}

fn tokenize_sequence_line(
    content: &str,
    line: usize,
    opens_block: bool,
    strict: bool,
    tokens: &mut Vec<Token>,
    contexts: &mut Vec<Context>,
) -> Result<()> {
    if opens_block {
        if content == "." {
            tokens.push(Token::SequenceStart);
            contexts.push(Context::Sequence);
        } else {
            if strict && content != "-" {
                return Err(Error::InvalidSequenceMarker {
                    line,
                    found: content.to_string(),
                });
            }
            tokens.push(Token::AnonymousMapStart);
            contexts.push(Context::Map);
        }
        return Ok(());
    }
    if content == "." {
        tokens.push(Token::SequenceElementEmptySequence);
    } else if content == "-" {
        tokens.push(Token::SequenceElementEmptyMap);
    } else if strict && (content.starts_with('.') || content.starts_with('-')) && !is_scalar_text(content)
    {
        return Err(Error::InvalidSequenceMarker {
            line,
            found: content.to_string(),
        });
    } else {
        tokens.push(Token::Value(content.to_string()));
    }
    Ok(())
}

/// A `-`-initial sequence line is still a plain value if it reads as a
/// number (`-5`) or a backslash-protected string; only marker-like text is
/// rejected in strict mode.
fn is_scalar_text(content: &str) -> bool {
    escape::split_primitive(content).is_some()
}

fn validate_line(content: &str, line: usize) -> Result<()> {
    if content.ends_with(' ') {
        return Err(Error::TrailingWhitespace { line });
    }
    if content.ends_with('\r') {
        return Err(Error::CarriageReturn { line });
    }
    if content.contains('\t') {
        return Err(Error::TabCharacter { line });
    }
    Ok(())
}

fn line_of_next_content(shift_tokens: &[ShiftToken<'_>], from: usize) -> usize {
    shift_tokens[from..]
        .iter()
        .find_map(|t| match t {
            ShiftToken::Content { line, .. } => Some(*line),
            _ => None,
        })
        .unwrap_or(0)
}
