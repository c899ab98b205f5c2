//! File information structure for enumerated files

use crate::types::Language;
use std::path::PathBuf;

/// A file discovered under the walk root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Root joined with the relative path
    pub path: PathBuf,
    pub relative_path: String,
    pub extension: Option<String>,
    /// Supported language, `None` for files the extractors skip
    pub language: Option<Language>,
    pub size: u64,
}

impl FileInfo {
    pub fn is_supported(&self) -> bool {
        self.language.is_some()
    }
}
