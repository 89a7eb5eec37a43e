//! Encoding pipeline: interchange value to ASON text.

pub mod serializer;
pub mod writer;
