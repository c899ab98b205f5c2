//! Brace-based extraction for JavaScript, TypeScript, JSX and TSX
//!
//! Every `function`, `class` and `const x = (...) =>` declaration is reported,
//! including ones nested in other declarations. Methods written inside a class
//! body without the `function` keyword are not detected. Declarations that
//! start inside a comment are prose, not code, and are skipped.

use super::brace_matcher::{comment_ranges, containing_range, find_block_close};
use super::source::SourceFile;
use super::{BlockExtractor, UNKNOWN_NAME};
use crate::types::{Chunk, ChunkType, Language};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \b(?:
            (?:export\s+(?:default\s+)?)?(?:async\s+)?
            (?:
                (?P<function>function)\b\s*\*?\s*
              | (?P<class>class)\s+
            )
            (?P<name>[A-Za-z_$][\w$]*)
          |
            (?:export\s+)?(?:const|let|var)\s+(?P<arrow>[A-Za-z_$][\w$]*)\s*=\s*
            (?:async\s*)?\([^)]*\)\s*=>
        )",
    )
    .expect("script declaration regex is valid")
});

/// Extractor for `.js`, `.ts`, `.jsx` and `.tsx` files
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptExtractor;

impl BlockExtractor for ScriptExtractor {
    fn extract(&self, file_path: &str, source: &SourceFile<'_>, language: Language) -> Vec<Chunk> {
        let content = source.content();
        let comments = comment_ranges(content);
        let mut chunks = Vec::new();
        let mut search_from = 0;

        while let Some(caps) = DECLARATION.captures_at(content, search_from) {
            let Some(declaration) = caps.get(0) else {
                break;
            };
            if let Some(comment) = containing_range(&comments, declaration.start()) {
                search_from = comment.end;
                continue;
            }
            search_from = declaration.end();
            let (chunk_type, name) = classify(&caps);

            let body_search = if chunk_type == ChunkType::Function {
                skip_parameters(content, declaration.end())
            } else {
                declaration.end()
            };

            let start_line = source.line_of_offset(declaration.start());
            let end_line = find_block_close(content, body_search)
                .map_or(source.line_count(), |close| source.line_of_offset(close));

            tracing::trace!(
                "{} {} '{}' at lines {}-{}",
                language,
                chunk_type,
                name,
                start_line,
                end_line
            );

            chunks.push(Chunk {
                file_path: file_path.to_string(),
                language,
                chunk_type,
                name,
                start_line,
                end_line,
                doc_string: jsdoc_before(content, declaration.start()),
                code: source.slice_lines(start_line, end_line),
            });
        }

        chunks
    }
}

fn classify(caps: &Captures<'_>) -> (ChunkType, String) {
    let name = |group: &str| {
        caps.name(group)
            .map_or_else(|| UNKNOWN_NAME.to_string(), |m| m.as_str().to_string())
    };

    if caps.name("class").is_some() {
        (ChunkType::Class, name("name"))
    } else if caps.name("function").is_some() {
        (ChunkType::Function, name("name"))
    } else {
        (ChunkType::ArrowFunction, name("arrow"))
    }
}

/// Offset just past a function's parameter list starting at `from`
///
/// Skips whitespace, an optional `<...>` type parameter list and a balanced
/// `(...)`, so destructuring braces in parameters never open the body. A
/// following `: Type` annotation is skipped too, up to the body's `{`. An
/// unclosed list leaves `from` unchanged.
fn skip_parameters(content: &str, from: usize) -> usize {
    let Some(tail) = content.get(from..) else {
        return from;
    };
    let mut offset = tail.len() - tail.trim_start().len();

    for (open, close) in [('<', '>'), ('(', ')')] {
        if !tail[offset..].starts_with(open) {
            continue;
        }
        let mut depth = 0usize;
        for (i, ch) in tail[offset..].char_indices() {
            if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    offset += i + ch.len_utf8();
                    break;
                }
            }
        }
        if depth > 0 {
            return from;
        }
        offset += tail[offset..].len() - tail[offset..].trim_start().len();
    }

    let end = from + offset;
    skip_return_type(content, end).unwrap_or(end)
}

/// Offset of the body `{` after a `: Type` annotation starting at `from`
///
/// A `{` at nesting depth zero opens the body unless it continues the type,
/// i.e. it comes first or follows `|`, `&`, `,`, `:`, `?` or `=>`. `None` when
/// there is no annotation or it ends in `;` (an overload signature).
fn skip_return_type(content: &str, from: usize) -> Option<usize> {
    let annotation = content.get(from..)?.strip_prefix(':')?;
    let mut depth = 0usize;
    let mut last: Option<char> = None;
    let mut before_last: Option<char> = None;

    for (i, ch) in annotation.char_indices() {
        match ch {
            '{' if depth == 0
                && last.is_some_and(|prev| !continues_type(prev, before_last)) =>
            {
                return Some(from + 1 + i);
            }
            '(' | '[' | '{' | '<' => depth += 1,
            // `=>` of a function type
            '>' if last == Some('=') => {}
            ')' | ']' | '}' | '>' => depth = depth.checked_sub(1)?,
            ';' if depth == 0 => return None,
            _ => {}
        }
        if !ch.is_whitespace() {
            before_last = last;
            last = Some(ch);
        }
    }

    None
}

fn continues_type(last: char, before_last: Option<char>) -> bool {
    matches!(last, '|' | '&' | ',' | ':' | '?') || (last == '>' && before_last == Some('='))
}

/// Text of a `/** ... */` block ending right before `start`, whitespace aside
///
/// Each interior line loses its leading `*` and is trimmed; empty lines are
/// dropped. A plain `/* */` comment or code between the comment and the
/// declaration yields `None`.
fn jsdoc_before(content: &str, start: usize) -> Option<String> {
    let body = content.get(..start)?.trim_end().strip_suffix("*/")?;
    let open = body.rfind("/**")?;
    let inner = &body[open + 3..];
    if inner.contains("*/") {
        return None;
    }

    let text = inner
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').unwrap_or(line).trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (!text.is_empty()).then_some(text)
}
