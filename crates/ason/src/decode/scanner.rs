//! Line/indentation scanner: raw text to a flat shift-token stream.
//!
//! Splits on line feeds only; carriage returns are never stripped here and
//! surface later in strict-mode line validation. Indentation is the count
//! of leading spaces. Only the *relative* level change matters: an indent
//! increase consumes exactly one level of new indentation, any additional
//! depth stays in the content text.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftToken<'a> {
    /// One level of new indentation opened before this line's content.
    Indent,
    /// This many levels closed before this line's content.
    Dedent(usize),
    /// Line text with leading indentation stripped; `line` is 1-based.
    Content { text: &'a str, line: usize },
}

#[inline]
fn leading_spaces(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0usize;
    while i < b.len() && b[i] == b' ' {
        i += 1;
    }
    i
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_line_feed(s: &str) -> Option<usize> {
    memchr::memchr(b'\n', s.as_bytes())
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_line_feed(s: &str) -> Option<usize> {
    s.find('\n')
}

struct LineIter<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Iterator for LineIter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        self.line += 1;
        match find_line_feed(self.rest) {
            Some(pos) => {
                let (raw, remaining) = self.rest.split_at(pos + 1);
                self.rest = remaining;
                Some((&raw[..pos], self.line))
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some((line, self.line))
            }
        }
    }
}

/// Tokenize `input` into shift tokens. A dedent or indent always precedes
/// the content token of the line that triggered it.
///
/// Empty lines are skipped in lenient mode. In strict mode an empty or
/// whitespace-only line is fatal. (A terminating line feed produces no
/// final empty line and is always fine.)
pub fn scan(input: &str, strict: bool) -> Result<Vec<ShiftToken<'_>>> {
    let mut tokens = Vec::new();
    // Sentinel below any real level so the first line registers an indent.
    let mut level: isize = -1;

    for (raw, line) in (LineIter {
        rest: input,
        line: 0,
    }) {
        if raw.is_empty() {
            if strict {
                return Err(Error::EmptyLine { line });
            }
            continue;
        }
        if strict && raw.trim().is_empty() {
            return Err(Error::EmptyLine { line });
        }
        let new_level = leading_spaces(raw) as isize;
        let text = if new_level > level {
            tokens.push(ShiftToken::Indent);
            &raw[(level + 1) as usize..]
        } else {
            if new_level < level {
                tokens.push(ShiftToken::Dedent((level - new_level) as usize));
            }
            &raw[new_level as usize..]
        };
        tokens.push(ShiftToken::Content { text, line });
        level = new_level;
    }
    Ok(tokens)
}
