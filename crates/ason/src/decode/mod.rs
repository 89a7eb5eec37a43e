//! Decoding pipeline: scanner -> structural tokenizer -> JSON emitter or
//! native-object parser.

pub mod json;
pub mod parser;
pub mod scanner;
pub mod tokenizer;
