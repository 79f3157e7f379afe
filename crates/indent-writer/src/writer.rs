//! Indentation state machine over a [`Sink`].

use std::fmt;
use std::io;

use crate::scope::IndentGuard;
use crate::sink::{IoSink, Sink};
use crate::StringBuilder;

/// Per-level prefix used when none is configured.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Options applied when constructing an [`IndentWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndentOptions {
    /// Text repeated once per indent level at the start of each line.
    pub indent_unit: String,
    /// Whether indent prefixes are emitted at all.
    pub enabled: bool,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT.to_owned(),
            enabled: true,
        }
    }
}

impl IndentOptions {
    /// Options indenting with `width` spaces per level.
    #[must_use]
    pub fn spaces(width: usize) -> Self {
        Self {
            indent_unit: " ".repeat(width),
            ..Self::default()
        }
    }

    /// Set the per-level prefix.
    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Enable or disable prefix emission.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Indented text printer.
///
/// Tracks the current indent depth and whether the next write starts a new
/// line. The first write after a [`newline`](Self::newline) is prefixed with
/// the indent unit repeated `depth` times. A fresh writer is not at a line
/// start, so its very first line is never prefixed.
///
/// Text operations return `&mut Self` so calls can be chained.
///
/// # Example
///
/// ```
/// use indent_writer::IndentWriter;
///
/// let mut w = IndentWriter::buffered();
/// w.println("fn main() {");
/// w.indented(|w| {
///     w.println("run();");
/// });
/// w.println("}");
///
/// assert_eq!(w.to_string(), "fn main() {\n    run();\n}\n");
/// ```
#[derive(Debug)]
pub struct IndentWriter<S> {
    sink: S,
    depth: usize,
    indent_unit: String,
    at_line_start: bool,
    enabled: bool,
}

/// Writer emitting directly into an [`io::Write`] stream.
pub type StreamIndentWriter<W> = IndentWriter<IoSink<W>>;

/// Writer accumulating into a [`StringBuilder`].
pub type BufferedIndentWriter = IndentWriter<StringBuilder>;

impl<S: Sink> IndentWriter<S> {
    /// Create a writer over `sink` with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, &IndentOptions::default())
    }

    /// Create a writer over `sink` with the given options.
    pub fn with_options(sink: S, options: &IndentOptions) -> Self {
        Self {
            sink,
            depth: 0,
            indent_unit: options.indent_unit.clone(),
            at_line_start: false,
            enabled: options.enabled,
        }
    }

    /// Write text, emitting the indent prefix first if at a line start.
    ///
    /// The text is passed through as-is; embedded newlines do not receive a
    /// prefix. Use [`print_lines`](Self::print_lines) for multi-line text.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if self.at_line_start {
            self.at_line_start = false;
            if self.enabled && self.depth > 0 {
                self.sink.write_raw(&self.indent_unit.repeat(self.depth));
            }
        }
        self.sink.write_raw(text);
        self
    }

    /// Write text followed by a newline.
    pub fn println(&mut self, text: &str) -> &mut Self {
        self.write(text).newline()
    }

    /// Synonym for [`println`](Self::println).
    pub fn writeln(&mut self, text: &str) -> &mut Self {
        self.println(text)
    }

    /// Print each line of `text` on its own indented line.
    ///
    /// Lines are split on `\n` and `\r\n`; a trailing line break does not
    /// produce an extra empty line, and empty input prints nothing.
    pub fn print_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.println(line);
        }
        self
    }

    /// Emit a line break. The next write starts a new indented line.
    pub fn newline(&mut self) -> &mut Self {
        self.sink.write_raw("\n");
        self.at_line_start = true;
        self
    }

    /// Shorthand: `None` emits a newline, `Some(text)` prints a line.
    pub fn call(&mut self, text: Option<&str>) -> &mut Self {
        match text {
            Some(text) => self.println(text),
            None => self.newline(),
        }
    }

    /// Increase the indent depth by `levels`.
    pub fn indent(&mut self, levels: usize) -> &mut Self {
        self.depth = self.depth.saturating_add(levels);
        self
    }

    /// Decrease the indent depth by `levels`, stopping at zero.
    pub fn unindent(&mut self, levels: usize) -> &mut Self {
        if levels > self.depth {
            tracing::trace!(depth = self.depth, levels, "Unindent clamped at zero");
        }
        self.depth = self.depth.saturating_sub(levels);
        self
    }

    /// Indent one level until the returned guard is dropped.
    ///
    /// The guard dereferences to the writer, so output can be written through
    /// it. Dropping it (including during unwinding or an early `?` return)
    /// restores the previous depth.
    pub fn scope(&mut self) -> IndentGuard<'_, S> {
        IndentGuard::new(self)
    }

    /// Run `f` one indent level deeper and return its result.
    pub fn indented<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.scope();
        f(&mut *guard)
    }

    /// Replace the per-level prefix for subsequent lines.
    pub fn set_indent_unit(&mut self, unit: impl Into<String>) {
        self.indent_unit = unit.into();
    }

    /// Enable or disable indent prefixes. Text is emitted either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current indent depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current per-level prefix.
    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Whether indent prefixes are emitted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the next write begins a new line.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Borrow the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the writer and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink + Default> Default for IndentWriter<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Sink + fmt::Display> fmt::Display for IndentWriter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sink, f)
    }
}

impl BufferedIndentWriter {
    /// Create a writer accumulating into a fresh [`StringBuilder`].
    #[must_use]
    pub fn buffered() -> Self {
        Self::new(StringBuilder::new())
    }

    /// Non-empty lines written so far.
    ///
    /// Indent prefixes are separate fragments, so they come back as their own
    /// entries. See [`StringBuilder::to_lines`].
    #[must_use]
    pub fn to_lines(&self) -> Vec<&str> {
        self.sink.to_lines()
    }

    /// Consume the writer and return the accumulated text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.sink.into_string()
    }
}

impl<W: io::Write> StreamIndentWriter<W> {
    /// Create a writer emitting into `inner`.
    pub fn stream(inner: W) -> Self {
        Self::new(IoSink::new(inner))
    }

    /// Return the stream, or the first I/O error hit while writing.
    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }
}

impl StreamIndentWriter<io::Stdout> {
    /// Create a writer emitting to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::stream(io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_block() {
        let mut w = IndentWriter::buffered();
        w.println("{");
        {
            let mut scope = w.scope();
            scope.println("x;");
        }
        w.println("}");
        assert_eq!(w.to_string(), "{\n    x;\n}\n");
    }

    #[test]
    fn test_first_line_is_not_prefixed() {
        let mut w = IndentWriter::buffered();
        w.indent(2);
        w.println("a").println("b");
        assert_eq!(w.to_string(), "a\n        b\n");
    }

    #[test]
    fn test_write_without_newline_continues_line() {
        let mut w = IndentWriter::buffered();
        w.newline();
        w.indent(1);
        w.write("a").write("b").newline();
        assert_eq!(w.to_string(), "\n    ab\n");
    }

    #[test]
    fn test_newline_does_not_emit_prefix() {
        let mut w = IndentWriter::buffered();
        w.println("start");
        w.indent(1);
        w.newline().newline();
        w.println("end");
        assert_eq!(w.to_string(), "start\n\n\n    end\n");
    }

    #[test]
    fn test_unindent_clamps_at_zero() {
        let mut w = IndentWriter::buffered();
        w.indent(2);
        w.unindent(5);
        assert_eq!(w.depth(), 0);
        w.indent(1);
        assert_eq!(w.depth(), 1);
    }

    #[test]
    fn test_depth_tracks_clamped_sum() {
        let mut w = IndentWriter::buffered();
        let steps: [(bool, usize); 7] = [
            (true, 3),
            (false, 1),
            (false, 4),
            (true, 2),
            (false, 0),
            (true, 1),
            (false, 2),
        ];
        let mut expected: usize = 0;
        for (up, levels) in steps {
            if up {
                w.indent(levels);
                expected += levels;
            } else {
                w.unindent(levels);
                expected = expected.saturating_sub(levels);
            }
            assert_eq!(w.depth(), expected);
        }
    }

    #[test]
    fn test_print_lines_indents_every_line() {
        let mut w = IndentWriter::buffered();
        w.println("begin");
        w.indented(|w| {
            w.print_lines("one\ntwo\r\nthree\n");
        });
        w.println("end");
        assert_eq!(w.to_string(), "begin\n    one\n    two\n    three\nend\n");
    }

    #[test]
    fn test_print_lines_empty_input_is_noop() {
        let mut w = IndentWriter::buffered();
        w.print_lines("");
        assert!(w.sink().is_empty());
    }

    #[test]
    fn test_print_lines_keeps_inner_blank_lines() {
        let mut w = IndentWriter::buffered();
        w.println("{");
        w.indented(|w| {
            w.print_lines("a\n\nb");
        });
        assert_eq!(w.to_string(), "{\n    a\n    \n    b\n");
    }

    #[test]
    fn test_call_shorthand() {
        let mut w = IndentWriter::buffered();
        w.call(Some("Hello,"));
        w.call(None);
        w.call(Some("World!"));
        assert_eq!(w.to_string(), "Hello,\n\nWorld!\n");
    }

    #[test]
    fn test_writeln_is_println() {
        let mut a = IndentWriter::buffered();
        let mut b = IndentWriter::buffered();
        a.println("x");
        b.writeln("x");
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_custom_indent_unit() {
        let mut w = IndentWriter::with_options(
            StringBuilder::new(),
            &IndentOptions::default().with_indent_unit("\t"),
        );
        w.println("a");
        w.indent(2);
        w.println("b");
        w.set_indent_unit("--");
        w.println("c");
        assert_eq!(w.to_string(), "a\n\t\tb\n----c\n");
    }

    #[test]
    fn test_disabled_skips_prefix_only() {
        let mut w = IndentWriter::buffered();
        w.println("a");
        w.indent(1);
        w.set_enabled(false);
        w.println("b");
        assert!(!w.is_enabled());
        w.set_enabled(true);
        w.println("c");
        assert_eq!(w.to_string(), "a\nb\n    c\n");
    }

    #[test]
    fn test_reenabling_mid_line_adds_no_prefix() {
        let mut w = IndentWriter::with_options(
            String::new(),
            &IndentOptions::spaces(2).with_enabled(false),
        );
        w.newline();
        w.indent(1);
        w.write("a");
        w.set_enabled(true);
        w.write("b").newline();
        assert_eq!(w.into_sink(), "\nab\n");
    }

    #[test]
    fn test_line_start_flag() {
        let mut w = IndentWriter::buffered();
        assert!(!w.at_line_start());
        w.newline();
        assert!(w.at_line_start());
        w.write("x");
        assert!(!w.at_line_start());
    }

    #[test]
    fn test_to_lines() {
        let mut w = IndentWriter::buffered();
        w.println("a");
        w.newline();
        w.println("b");
        assert_eq!(w.to_lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_spaces_options() {
        let options = IndentOptions::spaces(3);
        assert_eq!(options.indent_unit, "   ");
        assert!(options.enabled);
    }

    #[test]
    fn test_stream_writer() {
        let mut w = IndentWriter::stream(Vec::new());
        w.println("h1.red {");
        w.indented(|w| {
            w.println("color: red;");
        });
        w.println("}");
        let bytes = w.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "h1.red {\n    color: red;\n}\n");
    }

    #[test]
    fn test_stream_writer_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut w = IndentWriter::stream(file.reopen().unwrap());
        w.println("table tr, table td {");
        w.indented(|w| {
            w.println("border: 2px solid black");
        });
        w.println("}");
        w.finish().unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "table tr, table td {\n    border: 2px solid black\n}\n");
    }

    #[test]
    fn test_generated_program() {
        let mut w = IndentWriter::buffered();
        w.println("#include <stdio.h>");
        w.newline();
        w.println("int main(int argc, char* argv[])");
        w.println("{");
        w.indented(|w| {
            w.println("int target, guess;");
            w.newline();
            w.println("while ((guess = input()) != target) {");
            w.indented(|w| {
                w.println("if (guess < target) {");
                w.indented(|w| {
                    w.println(r#"printf("Higher!\n");"#);
                });
                w.println("} else {");
                w.indented(|w| {
                    w.println(r#"printf("Lower!\n");"#);
                });
                w.println("}");
            });
            w.println("}");
            w.newline();
            w.println("return 0;");
        });
        w.println("}");

        let expected = r#"#include <stdio.h>

int main(int argc, char* argv[])
{
    int target, guess;

    while ((guess = input()) != target) {
        if (guess < target) {
            printf("Higher!\n");
        } else {
            printf("Lower!\n");
        }
    }

    return 0;
}
"#;
        assert_eq!(w.to_string(), expected);
    }
}
