#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
mod escape;
mod number;
pub mod options;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::Value;

/// Convert ASON text to JSON text.
///
/// Runs the scanner, the structural tokenizer, and the JSON emitter;
/// `options.strict` gates line-hygiene and grammar validation, and
/// `options.pretty` switches the emitter to pretty-printed output.
pub fn ason_to_json(ason: &str, options: &Options) -> Result<String> {
    let shift_tokens = decode::scanner::scan(ason, options.strict)?;
    let tokens = decode::tokenizer::tokenize(&shift_tokens, options.strict)?;
    Ok(decode::json::emit(&tokens, options.pretty))
}

/// Convert JSON text to ASON text. The JSON side is parsed by serde_json
/// (insertion order preserved); the ASON side is the serializer.
#[cfg(feature = "json")]
pub fn json_to_ason(json: &str) -> Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(stringify(&Value::from_json(&parsed)))
}

/// Parse ASON text directly into an interchange [`Value`], without going
/// through JSON text. Uses the lenient (non-strict) grammar.
pub fn parse(ason: &str) -> Result<Value> {
    let shift_tokens = decode::scanner::scan(ason, false)?;
    let tokens = decode::tokenizer::tokenize(&shift_tokens, false)?;
    Ok(decode::parser::build(&tokens))
}

/// Serialize an interchange [`Value`] to ASON text. Total: every value
/// composed of the supported kinds has a rendering.
pub fn stringify(value: &Value) -> String {
    encode::serializer::stringify(value)
}
