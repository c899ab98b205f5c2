//! Line-oriented view of a source file shared by the extractors

/// File text together with its line split and a byte-offset line index
///
/// Lines are split on `\n` only, so `\r` and every other byte stays in the
/// line text and joining a line range back with `\n` reproduces the source.
pub struct SourceFile<'a> {
    content: &'a str,
    lines: Vec<&'a str>,
    line_starts: Vec<usize>,
}

impl<'a> SourceFile<'a> {
    pub fn new(content: &'a str) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in &lines {
            line_starts.push(offset);
            offset += line.len() + 1;
        }

        Self {
            content,
            lines,
            line_starts,
        }
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines; a trailing newline yields a final empty line
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 1-based line number containing the given byte offset
    pub fn line_of_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(index) => index + 1,
            Err(index) => index,
        }
    }

    /// Verbatim text of the inclusive 1-based line range
    pub fn slice_lines(&self, start_line: usize, end_line: usize) -> String {
        let start = start_line.saturating_sub(1).min(self.lines.len());
        let end = end_line.min(self.lines.len()).max(start);
        self.lines[start..end].join("\n")
    }
}

/// Width of the leading whitespace of a line, tabs and spaces counted alike
pub fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Whether a line is empty or whitespace only
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
