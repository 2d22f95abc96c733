use std::fmt::Write;

const INDENT: &str = "  ";

/// Line-oriented builder for generated Swift source.
///
/// Every line is written at the current indentation level; blank lines are
/// written without trailing whitespace.
#[derive(Debug, Default)]
pub(crate) struct SwiftWriter {
    indent: usize,
    output: String,
}
impl SwiftWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write `opener`, then everything `body` writes one level deeper, then
    /// `closer` back at the current level.
    pub fn block(
        &mut self,
        opener: impl AsRef<str>,
        closer: &str,
        body: impl FnOnce(&mut Self),
    ) {
        self.line(opener);
        self.indented(body);
        self.line(closer);
    }

    /// Write each line of `description` as a `///` doc comment.
    pub fn doc_comment(&mut self, description: Option<&str>) {
        let Some(description) = description else {
            return;
        };
        for line in description.trim().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }

    /// Like [`block()`](Self::block), for bodies that can fail. The closer is
    /// written either way.
    pub fn try_block<E>(
        &mut self,
        opener: impl AsRef<str>,
        closer: &str,
        body: impl FnOnce(&mut Self) -> Result<(), E>,
    ) -> Result<(), E> {
        self.line(opener);
        self.indent += 1;
        let result = body(self);
        self.indent -= 1;
        self.line(closer);
        result
    }

    pub fn line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if line.is_empty() {
            self.blank();
            return;
        }
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Write `lines` verbatim at the current indentation level plus `extra`
    /// additional levels.
    pub fn lines_indented_by(&mut self, extra: usize, lines: &[String]) {
        self.indent += extra;
        for line in lines {
            self.line(line);
        }
        self.indent -= extra;
    }
}

/// Quote `text` as a single-line Swift string literal.
pub(crate) fn quoted(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{{{:x}}}", c as u32);
            },
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// The body lines of a Swift multi-line string literal holding `text`
/// verbatim.
///
/// Backslashes are escaped and any `"""` is broken up so the literal can't
/// be terminated early; whitespace and line breaks are kept as they are.
pub(crate) fn multiline_literal_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.replace('\\', "\\\\").replace("\"\"\"", "\\\"\"\""))
        .collect()
}

/// Collapse `text` onto one line: each line is trimmed and the lines are
/// joined with single spaces.
pub(crate) fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_indents_body() {
        let mut writer = SwiftWriter::new();
        writer.block("struct A {", "}", |w| {
            w.line("let x: Int");
            w.blank();
            w.block("struct B {", "}", |w| w.line("let y: Int"));
        });
        assert_eq!(
            writer.finish(),
            "struct A {\n  let x: Int\n\n  struct B {\n    let y: Int\n  }\n}\n",
        );
    }

    #[test]
    fn quoted_escapes_quotes_backslashes_and_newlines() {
        assert_eq!(quoted("a \"b\"\\c\nd"), r#""a \"b\"\\c\nd""#);
    }

    #[test]
    fn multiline_literal_breaks_up_triple_quotes() {
        let lines = multiline_literal_lines("query {\n  f(s: \"\"\"x\"\"\")\n}");
        assert_eq!(lines, vec![
            "query {".to_string(),
            "  f(s: \\\"\"\"x\\\"\"\")".to_string(),
            "}".to_string(),
        ]);
    }

    #[test]
    fn single_line_collapses_indentation() {
        assert_eq!(
            single_line("query Q {\n  a {\n    b\n  }\n}"),
            "query Q { a { b } }",
        );
    }

    #[test]
    fn doc_comment_keeps_blank_lines() {
        let mut writer = SwiftWriter::new();
        writer.doc_comment(Some("First.\n\nSecond.\n"));
        writer.doc_comment(None);
        assert_eq!(writer.finish(), "/// First.\n///\n/// Second.\n");
    }
}
