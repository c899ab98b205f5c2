//! # Code Chunker - Lexical Extraction of Functions and Classes
//!
//! Walks a source tree and cuts every Python and JavaScript/TypeScript file
//! into chunks: functions, methods, classes and arrow functions, each with its
//! location, leading documentation and verbatim source text.
//!
//! ## Overview
//!
//! Detection is regex-based and extent measurement is lexical: Python blocks
//! end where indentation returns to the header's level, JS/TS blocks end at
//! the brace that balances the first `{` after the declaration. No syntax
//! tree is built, so the output is a best-effort approximation that is cheap
//! enough to run over large repositories.
//!
//! ## Supported Files
//!
//! | Extension | Language     |
//! |-----------|--------------|
//! | `.py`     | `python`     |
//! | `.js`     | `javascript` |
//! | `.ts`     | `typescript` |
//! | `.jsx`    | `jsx`        |
//! | `.tsx`    | `tsx`        |
//!
//! Every other file is enumerated and skipped.
//!
//! ## Architecture
//!
//! ```text
//! parse_directory(root)
//!        │
//!   FileWalker ──(spawn_blocking)──> [FileInfo]
//!        │
//!   tokio::fs::read_to_string (sequential)
//!        │
//!   PythonExtractor | ScriptExtractor
//!        │
//!     [Chunk]
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: Directory orchestration and the [`ChunkParser`] entry point
//! - [`indexer`]: File walking, language detection and block extraction
//! - [`config`]: Configuration management with environment variable support
//! - [`types`]: Chunk model and summaries
//! - [`error`]: Error types
//! - [`paths`]: Platform configuration paths
//!
//! ## Usage Example
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let chunks = code_chunker::parse_directory("./src").await?;
//!     for chunk in &chunks {
//!         println!("{}:{} {} {}", chunk.file_path, chunk.start_line, chunk.chunk_type, chunk.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// File walking, language detection, and block extraction
pub mod indexer;

/// Directory parsing orchestration
pub mod parser;

/// Platform-specific configuration paths
pub mod paths;

/// Chunk model and aggregate summaries
pub mod types;

pub use config::Config;
pub use error::{ChunkerError, ConfigError};
pub use parser::{ChunkParser, parse_directory};
pub use types::{Chunk, ChunkSummary, ChunkType, Language};
