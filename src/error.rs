/// Centralized error types for code-chunker using thiserror
///
/// Only I/O and configuration faults are errors. Malformed but readable
/// source never produces one; extraction falls back instead.
use thiserror::Error;

/// Main error type for directory parsing
#[derive(Error, Debug)]
pub enum ChunkerError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to walk directory '{path}': {source}")]
    WalkFailed {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file '{file}': {source}")]
    FileReadFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Background task failed: {0}")]
    TaskFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {0}")]
    LoadFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

impl ChunkerError {
    /// Path of the file or directory the error is about, when known
    pub fn path(&self) -> Option<&str> {
        match self {
            ChunkerError::DirectoryNotFound(path) | ChunkerError::NotADirectory(path) => {
                Some(path)
            }
            ChunkerError::WalkFailed { path, .. } => Some(path),
            ChunkerError::FileReadFailed { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Check if this is a caller mistake (bad root, bad config) vs a system fault
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ChunkerError::DirectoryNotFound(_)
                | ChunkerError::NotADirectory(_)
                | ChunkerError::Config(ConfigError::InvalidValue { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChunkerError::DirectoryNotFound("/missing".to_string());
        assert_eq!(err.to_string(), "Directory not found: /missing");
    }

    #[test]
    fn test_file_read_failed_names_file() {
        let err = ChunkerError::FileReadFailed {
            file: "src/app.py".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read file 'src/app.py': denied");
        assert_eq!(err.path(), Some("src/app.py"));
    }

    #[test]
    fn test_file_read_failed_exposes_source() {
        use std::error::Error as _;

        let err = ChunkerError::FileReadFailed {
            file: "a.js".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_wraps() {
        let err: ChunkerError = ConfigError::InvalidValue {
            key: "extraction.languages".to_string(),
            reason: "must not be empty".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration value for 'extraction.languages': must not be empty"
        );
    }

    #[test]
    fn test_is_user_error() {
        assert!(ChunkerError::NotADirectory("x".to_string()).is_user_error());
        assert!(
            ChunkerError::Config(ConfigError::InvalidValue {
                key: "k".to_string(),
                reason: "r".to_string(),
            })
            .is_user_error()
        );

        let read_err = ChunkerError::FileReadFailed {
            file: "a.py".to_string(),
            source: std::io::Error::other("boom"),
        };
        assert!(!read_err.is_user_error());
        assert!(!ChunkerError::TaskFailed("panic".to_string()).is_user_error());
        assert!(ChunkerError::TaskFailed("panic".to_string()).path().is_none());
    }

    #[test]
    fn test_config_error_file_not_found() {
        let err = ConfigError::FileNotFound("/etc/chunker.toml".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /etc/chunker.toml"
        );
    }
}
