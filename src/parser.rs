//! Directory parsing: walk, read and extract chunks from every supported file

use crate::config::Config;
use crate::error::ChunkerError;
use crate::indexer::{FileInfo, FileWalker, SourceFile, extractor_for, language_for_path};
use crate::types::{Chunk, Language};
use std::path::Path;

/// Configurable directory parser
///
/// Files are read one at a time; chunks come back in walk order, then in
/// declaration order within each file.
#[derive(Debug, Clone, Default)]
pub struct ChunkParser {
    config: Config,
}

impl ChunkParser {
    /// Parser with default settings (no config file, no environment overrides)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extract chunks from every supported file under `root`
    ///
    /// The first file that cannot be read aborts the whole call.
    pub async fn parse_directory(&self, root: impl AsRef<Path>) -> Result<Vec<Chunk>, ChunkerError> {
        let root = root.as_ref();
        tracing::debug!("Parsing directory: {}", root.display());

        let walker = FileWalker::from_config(root, &self.config.walker);
        let files = tokio::task::spawn_blocking(move || walker.walk())
            .await
            .map_err(|e| ChunkerError::TaskFailed(format!("file walker task: {}", e)))??;

        let mut chunks = Vec::new();
        let mut files_parsed = 0usize;

        for file in &files {
            let Some(language) = self.enabled_language(file) else {
                tracing::debug!("Skipping {}", file.relative_path);
                continue;
            };

            let file_chunks = self.parse_source(&file.path, language).await?;
            tracing::debug!("{}: {} chunks", file.relative_path, file_chunks.len());
            chunks.extend(file_chunks);
            files_parsed += 1;
        }

        tracing::info!(
            "Extracted {} chunks from {} of {} files under {}",
            chunks.len(),
            files_parsed,
            files.len(),
            root.display()
        );

        Ok(chunks)
    }

    /// Extract chunks from a single file
    ///
    /// Unsupported or disabled languages yield an empty list without reading
    /// the file.
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Chunk>, ChunkerError> {
        let path = path.as_ref();
        match language_for_path(path).filter(|lang| self.config.extraction.is_enabled(*lang)) {
            Some(language) => self.parse_source(path, language).await,
            None => Ok(Vec::new()),
        }
    }

    fn enabled_language(&self, file: &FileInfo) -> Option<Language> {
        file.language
            .filter(|lang| self.config.extraction.is_enabled(*lang))
    }

    async fn parse_source(&self, path: &Path, language: Language) -> Result<Vec<Chunk>, ChunkerError> {
        let file_path = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ChunkerError::FileReadFailed {
                file: file_path.clone(),
                source,
            })?;

        let source = SourceFile::new(&content);
        let mut chunks = extractor_for(language).extract(&file_path, &source, language);

        if !self.config.extraction.include_docs {
            for chunk in &mut chunks {
                chunk.doc_string = None;
            }
        }

        Ok(chunks)
    }
}

/// Extract chunks from every supported file under `root` with default settings
pub async fn parse_directory(root: impl AsRef<Path>) -> Result<Vec<Chunk>, ChunkerError> {
    ChunkParser::new().parse_directory(root).await
}
