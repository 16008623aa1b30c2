//! Indent-aware output buffer for declaration text.

const INDENT: &str = "    ";

/// Accumulates generated text, applying the current indentation at the start
/// of every line.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new() -> Self {
        SourceWriter::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Write text to output, indenting first if at the start of a line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Terminate the current line.
    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a full line of text.
    pub fn write_text_line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_at_line_start_only() {
        let mut w = SourceWriter::new();
        w.write_text_line("a{");
        w.increase_indent();
        w.write("b");
        w.write(".c();");
        w.write_line();
        w.decrease_indent();
        w.write_text_line("}");
        assert_eq!(w.finish(), "a{\n    b.c();\n}\n");
    }

    #[test]
    fn test_decrease_indent_saturates() {
        let mut w = SourceWriter::new();
        w.decrease_indent();
        w.write_text_line("x");
        assert_eq!(w.finish(), "x\n");
    }
}
