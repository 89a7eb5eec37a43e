use thiserror::Error;

use std::io;

/// Malformed-input conditions. All syntax variants carry a 1-based line
/// number and abort the whole conversion; there are no partial results.
/// Most are raised only when `Options::strict` is set, the lenient mode
/// falls back to the legacy heuristic interpretations instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: empty or whitespace-only line")]
    EmptyLine { line: usize },

    #[error("line {line}: trailing whitespace")]
    TrailingWhitespace { line: usize },

    #[error("line {line}: carriage return in line content")]
    CarriageReturn { line: usize },

    #[error("line {line}: tab character in line content")]
    TabCharacter { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: empty value")]
    EmptyValue { line: usize },

    #[error("line {line}: map entry has no value and no nested block")]
    MissingSeparator { line: usize },

    #[error("line {line}: sequence element introducing a block must be '.' or '-', got {found:?}")]
    InvalidSequenceMarker { line: usize, found: String },

    #[error("line {line}: indentation decrease closes more levels than are open")]
    UnbalancedIndent { line: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
