//! File walking, language detection and block extraction
//!
//! Provides functionality to walk directories, detect languages from file
//! extensions, and cut source files into function, method and class chunks.
//! Extraction is lexical and best-effort: declarations are located with
//! regular expressions and their extent is measured by indentation (Python)
//! or brace balance (JS/TS), never by a full parser.

mod brace_matcher;
mod file_info;
mod file_walker;
mod language;
mod python;
mod script;
mod source;

pub use brace_matcher::find_block_close;
pub use file_info::FileInfo;
pub use file_walker::FileWalker;
pub use language::{detect_language, language_for_path};
pub use python::PythonExtractor;
pub use script::ScriptExtractor;
pub use source::SourceFile;

use crate::types::{Chunk, Language};

/// Name reported when a declaration's identifier cannot be recovered
pub const UNKNOWN_NAME: &str = "unknown";

/// Language-specific extraction of chunks from one file
pub trait BlockExtractor {
    /// Extract every declaration in `source`, in match order
    ///
    /// Never fails: malformed input degrades to wider blocks or missing docs.
    fn extract(&self, file_path: &str, source: &SourceFile<'_>, language: Language) -> Vec<Chunk>;
}

/// Extractor responsible for a language
pub fn extractor_for(language: Language) -> &'static dyn BlockExtractor {
    if language.is_script() {
        &ScriptExtractor
    } else {
        &PythonExtractor
    }
}

/// Extract chunks from in-memory file content
pub fn extract_chunks(file_path: &str, content: &str, language: Language) -> Vec<Chunk> {
    let source = SourceFile::new(content);
    extractor_for(language).extract(file_path, &source, language)
}
