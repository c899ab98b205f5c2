//! Indentation-based extraction of Python functions, methods and classes
//!
//! Declarations are found with a single regex pass, so a `def` nested inside
//! another function is reported on its own as well as inside its parent's code.

use super::source::{SourceFile, indentation, is_blank};
use super::{BlockExtractor, UNKNOWN_NAME};
use crate::types::{Chunk, ChunkType, Language};
use regex::Regex;
use std::sync::LazyLock;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:async[ \t]+)?(def|class)[ \t]+(\w+)")
        .expect("python declaration regex is valid")
});

const DOC_MARKERS: [&str; 2] = ["\"\"\"", "'''"];

/// Extractor for `.py` files
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonExtractor;

impl BlockExtractor for PythonExtractor {
    fn extract(&self, file_path: &str, source: &SourceFile<'_>, language: Language) -> Vec<Chunk> {
        let lines = source.lines();
        let scopes = enclosing_lines(lines);
        let mut chunks = Vec::new();

        for caps in DECLARATION.captures_iter(source.content()) {
            let Some(header) = caps.get(0) else {
                continue;
            };
            let keyword = caps.get(1).map_or("def", |m| m.as_str());
            let name = caps
                .get(2)
                .map_or(UNKNOWN_NAME.to_string(), |m| m.as_str().to_string());

            let header_index = source.line_of_offset(header.start()) - 1;
            let end_index = block_end(lines, header_index);

            let chunk_type = if keyword == "class" {
                ChunkType::Class
            } else if is_inside_class(lines, &scopes, header_index) {
                ChunkType::Method
            } else {
                ChunkType::Function
            };

            tracing::trace!(
                "python {} '{}' at lines {}-{}",
                chunk_type,
                name,
                header_index + 1,
                end_index + 1
            );

            chunks.push(Chunk {
                file_path: file_path.to_string(),
                language,
                chunk_type,
                name,
                start_line: header_index + 1,
                end_line: end_index + 1,
                doc_string: docstring(lines, header_index),
                code: source.slice_lines(header_index + 1, end_index + 1),
            });
        }

        chunks
    }
}

/// For every non-blank line, the index of the nearest preceding non-blank line
/// with strictly smaller indentation
///
/// Built in one pass with an indentation stack: entries at the same or deeper
/// indentation are popped before the current line is pushed.
fn enclosing_lines(lines: &[&str]) -> Vec<Option<usize>> {
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut enclosing = vec![None; lines.len()];

    for (index, line) in lines.iter().enumerate() {
        if is_blank(line) {
            continue;
        }
        let indent = indentation(line);
        while stack.last().is_some_and(|&(top, _)| top >= indent) {
            stack.pop();
        }
        enclosing[index] = stack.last().map(|&(_, line_index)| line_index);
        stack.push((indent, index));
    }

    enclosing
}

fn is_inside_class(lines: &[&str], scopes: &[Option<usize>], header_index: usize) -> bool {
    scopes
        .get(header_index)
        .copied()
        .flatten()
        .is_some_and(|parent| lines[parent].trim_start().starts_with("class "))
}

/// Index of the last non-blank line indented deeper than the header
///
/// The header line itself is returned when no such line follows.
fn block_end(lines: &[&str], header_index: usize) -> usize {
    let header_indent = indentation(lines[header_index]);
    let mut end = header_index;

    for (index, line) in lines.iter().enumerate().skip(header_index + 1) {
        if is_blank(line) {
            continue;
        }
        if indentation(line) <= header_indent {
            break;
        }
        end = index;
    }

    end
}

/// Docstring opening on the line right after the header
fn docstring(lines: &[&str], header_index: usize) -> Option<String> {
    let opening_index = header_index + 1;
    let opening = lines.get(opening_index)?.trim();
    let marker = DOC_MARKERS
        .into_iter()
        .find(|marker| opening.starts_with(marker))?;

    let closing_index = if opening[marker.len()..].contains(marker) {
        opening_index
    } else {
        (opening_index + 1..lines.len()).find(|&index| lines[index].contains(marker))?
    };

    let text = lines[opening_index..=closing_index].join("\n");
    Some(text.replace(marker, "").trim().to_string())
}
