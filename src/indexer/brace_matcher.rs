//! String- and comment-aware lexing for the JS/TS family
//!
//! One character-level state machine drives both brace matching and the
//! comment map used to ignore declarations written in comment prose.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

/// Lexical state of the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    /// Inside a string opened by the given quote (`'`, `"` or `` ` ``)
    InString(char),
    /// After a backslash; the next character is skipped and scanning resumes
    /// in the string it appeared in, or in code when `None`
    Escaped(Option<char>),
    LineComment,
    /// The `*` of an opening `/*` comes next
    BlockCommentOpen,
    BlockComment,
    /// The `/` of a closing `*/` comes next
    BlockCommentClose,
}

/// What a character belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Code,
    String,
    Comment,
}

/// Iterator over `(byte offset, char, region)` of a source slice
///
/// Single- and double-quoted strings end at a newline, template literals do
/// not. Comment delimiters belong to the comment.
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    state: ScanState,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            state: ScanState::Code,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = (usize, char, Region);

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, ch) = self.chars.next()?;
        let next = self.chars.peek().map(|&(_, c)| c);

        let (region, state) = match self.state {
            ScanState::Code => match ch {
                '\'' | '"' | '`' => (Region::String, ScanState::InString(ch)),
                '\\' => (Region::Code, ScanState::Escaped(None)),
                '/' if next == Some('/') => (Region::Comment, ScanState::LineComment),
                '/' if next == Some('*') => (Region::Comment, ScanState::BlockCommentOpen),
                _ => (Region::Code, ScanState::Code),
            },
            ScanState::InString(quote) => match ch {
                '\\' => (Region::String, ScanState::Escaped(Some(quote))),
                '\n' if quote != '`' => (Region::Code, ScanState::Code),
                c if c == quote => (Region::String, ScanState::Code),
                _ => (Region::String, self.state),
            },
            ScanState::Escaped(None) => (Region::Code, ScanState::Code),
            ScanState::Escaped(Some(quote)) => (Region::String, ScanState::InString(quote)),
            ScanState::LineComment => match ch {
                '\n' => (Region::Code, ScanState::Code),
                _ => (Region::Comment, ScanState::LineComment),
            },
            ScanState::BlockCommentOpen => (Region::Comment, ScanState::BlockComment),
            ScanState::BlockComment => match ch {
                '*' if next == Some('/') => (Region::Comment, ScanState::BlockCommentClose),
                _ => (Region::Comment, ScanState::BlockComment),
            },
            ScanState::BlockCommentClose => (Region::Comment, ScanState::Code),
        };

        self.state = state;
        Some((offset, ch, region))
    }
}

/// Byte offset of the `}` closing the first block opened at or after `start`
///
/// Braces inside string literals and comments are ignored. A `}` seen before
/// any `{` is ignored. Returns `None` when the block never closes, including
/// when no `{` follows `start` at all.
pub fn find_block_close(content: &str, start: usize) -> Option<usize> {
    let tail = content.get(start..)?;
    let mut depth = 0usize;

    for (offset, ch, region) in Lexer::new(tail) {
        if region != Region::Code {
            continue;
        }
        match ch {
            '{' => depth += 1,
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}

/// Byte ranges of every comment in `content`, in order
pub fn comment_ranges(content: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();

    for (offset, ch, region) in Lexer::new(content) {
        if region != Region::Comment {
            continue;
        }
        let end = offset + ch.len_utf8();
        match ranges.last_mut() {
            Some(last) if last.end == offset => last.end = end,
            _ => ranges.push(offset..end),
        }
    }

    ranges
}

/// The range among the sorted `ranges` that contains `offset`
pub fn containing_range(ranges: &[Range<usize>], offset: usize) -> Option<&Range<usize>> {
    let index = ranges.partition_point(|range| range.end <= offset);
    ranges.get(index).filter(|range| range.start <= offset)
}
