use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Source language of a chunk, derived only from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
}

impl Language {
    /// All supported languages, in extension-table order
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Jsx,
        Language::Tsx,
    ];

    /// Lowercase tag used in JSON output and configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Jsx => "jsx",
            Language::Tsx => "tsx",
        }
    }

    /// Whether blocks are delimited by braces (the JS/TS family)
    pub fn is_script(&self) -> bool {
        !matches!(self, Language::Python)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of code unit a chunk represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    Function,
    Class,
    Method,
    ArrowFunction,
    Other,
}

impl ChunkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Function => "function",
            ChunkType::Class => "class",
            ChunkType::Method => "method",
            ChunkType::ArrowFunction => "arrow_function",
            ChunkType::Other => "other",
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted unit of source code
///
/// `code` is always the verbatim text of lines `start_line..=end_line` of the
/// file, joined with `\n`. Line numbers are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Path of the source file, as produced by the directory walk
    pub file_path: String,
    /// Language derived from the file extension
    pub language: Language,
    /// Function, class, method or arrow function
    pub chunk_type: ChunkType,
    /// Declared identifier, or `"unknown"` when none could be recovered
    pub name: String,
    /// First line of the chunk (1-based)
    pub start_line: usize,
    /// Last line of the chunk (1-based, inclusive)
    pub end_line: usize,
    /// Leading docstring or JSDoc text
    pub doc_string: Option<String>,
    /// Verbatim source of the chunk
    pub code: String,
}

impl Chunk {
    /// Number of source lines covered by this chunk
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Aggregate counts over a batch of chunks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSummary {
    /// Total number of chunks
    pub total_chunks: usize,
    /// Number of distinct files that produced at least one chunk
    pub files_with_chunks: usize,
    /// Chunk counts keyed by language tag
    pub by_language: BTreeMap<Language, usize>,
    /// Chunk counts keyed by chunk type
    pub by_type: BTreeMap<ChunkType, usize>,
}

impl ChunkSummary {
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        let mut summary = ChunkSummary {
            total_chunks: chunks.len(),
            ..Default::default()
        };
        let mut files = BTreeSet::new();

        for chunk in chunks {
            files.insert(chunk.file_path.as_str());
            *summary.by_language.entry(chunk.language).or_insert(0) += 1;
            *summary.by_type.entry(chunk.chunk_type).or_insert(0) += 1;
        }

        summary.files_with_chunks = files.len();
        summary
    }
}
