/// Conversion options, threaded through the scanner and structural
/// tokenizer. The escaping engine is unaffected by strictness.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Reject line-hygiene and grammar violations instead of applying the
    /// lenient legacy fallbacks.
    pub strict: bool,
    /// Pretty-print emitted JSON: line feed after every opening bracket and
    /// comma, one space of indentation per nesting level.
    pub pretty: bool,
}

impl Options {
    pub fn strict() -> Self {
        Self {
            strict: true,
            pretty: false,
        }
    }
}
