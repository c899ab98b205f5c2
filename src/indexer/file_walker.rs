//! File walking functionality for directory traversal

use super::file_info::FileInfo;
use super::language::language_for_path;
use crate::config::WalkerConfig;
use crate::error::ChunkerError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive enumerator of every file below a root directory
///
/// Unlike ignore-aware walkers this visits hidden files and does not consult
/// `.gitignore`. Any traversal error aborts the walk.
pub struct FileWalker {
    pub(crate) root: PathBuf,
    pub(crate) follow_links: bool,
    pub(crate) sort_by_file_name: bool,
    pub(crate) max_depth: Option<usize>,
    pub(crate) max_file_size: Option<u64>,
}

impl FileWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            follow_links: false,
            sort_by_file_name: false,
            max_depth: None,
            max_file_size: None,
        }
    }

    pub fn from_config(root: impl AsRef<Path>, config: &WalkerConfig) -> Self {
        Self::new(root)
            .with_follow_links(config.follow_links)
            .with_sort_by_file_name(config.sort_by_file_name)
            .with_max_depth(config.max_depth)
            .with_max_file_size(config.max_file_size)
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_sort_by_file_name(mut self, sort: bool) -> Self {
        self.sort_by_file_name = sort;
        self
    }

    /// Limit recursion; depth 1 means files directly under the root only
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_file_size(mut self, max_file_size: Option<u64>) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Walk the directory and collect every file, depth-first
    pub fn walk(&self) -> Result<Vec<FileInfo>, ChunkerError> {
        if !self.root.exists() {
            return Err(ChunkerError::DirectoryNotFound(
                self.root.display().to_string(),
            ));
        }
        if !self.root.is_dir() {
            return Err(ChunkerError::NotADirectory(self.root.display().to_string()));
        }

        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_links);
        if self.sort_by_file_name {
            walker = walker.sort_by_file_name();
        }
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();

        for entry in walker {
            let entry = entry.map_err(|e| self.walk_error(e))?;
            let path = entry.path();

            // Skip directories (including symlinks resolving to one)
            if path.is_dir() {
                continue;
            }

            let size = entry.metadata().map_err(|e| self.walk_error(e))?.len();
            if let Some(limit) = self.max_file_size
                && size > limit
            {
                tracing::debug!("Skipping large file: {:?} ({} bytes)", path, size);
                continue;
            }

            let relative_path = path
                .strip_prefix(&self.root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            let extension = path.extension().and_then(|e| e.to_str()).map(String::from);

            files.push(FileInfo {
                path: path.to_path_buf(),
                relative_path,
                extension,
                language: language_for_path(path),
                size,
            });
        }

        tracing::info!(
            "Found {} files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    fn walk_error(&self, err: walkdir::Error) -> ChunkerError {
        let path = err
            .path()
            .unwrap_or(&self.root)
            .display()
            .to_string();
        ChunkerError::WalkFailed { path, source: err }
    }
}
