/// Indentation-aware line writer for ASON output: one space per nesting
/// level, one line feed per line, trailing line feed trimmed at the end.
pub struct LineWriter {
    out: String,
    indent_cache: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent_cache: String::new(),
        }
    }

    fn write_indent(&mut self, level: usize) {
        if level == 0 {
            return;
        }
        if self.indent_cache.len() < level {
            self.indent_cache
                .extend(core::iter::repeat_n(' ', level - self.indent_cache.len()));
        }
        self.out.push_str(&self.indent_cache[..level]);
    }

    pub fn line(&mut self, level: usize, s: &str) {
        self.write_indent(level);
        self.out.push_str(s);
        self.out.push('\n');
    }

    /// `key value` entry line.
    pub fn line_kv(&mut self, level: usize, key: &str, value: &str) {
        self.write_indent(level);
        self.out.push_str(key);
        self.out.push(' ');
        self.out.push_str(value);
        self.out.push('\n');
    }

    /// Marker-prefixed line: `.key`, `-key`, or a bare `.`/`-` marker.
    pub fn line_marked(&mut self, level: usize, marker: char, key: &str) {
        self.write_indent(level);
        self.out.push(marker);
        self.out.push_str(key);
        self.out.push('\n');
    }

    pub fn into_string(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
