/// Walker and extraction settings
///
/// Precedence, highest first: CLI flags, `CODE_CHUNKER_*` environment
/// variables, the TOML config file, built-in defaults.
use crate::error::{ChunkerError, ConfigError};
use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory traversal configuration
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Chunk extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Directory traversal configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links while descending
    #[serde(default)]
    pub follow_links: bool,

    /// Visit directory entries in file-name order instead of listing order
    #[serde(default)]
    pub sort_by_file_name: bool,

    /// Maximum recursion depth below the root (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Skip files larger than this many bytes (unlimited when unset)
    #[serde(default)]
    pub max_file_size: Option<u64>,
}

/// Chunk extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Languages to extract; files of other languages are skipped
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    /// Extract docstrings and JSDoc comments
    #[serde(default = "default_include_docs")]
    pub include_docs: bool,
}

fn default_languages() -> Vec<Language> {
    Language::ALL.to_vec()
}

fn default_include_docs() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            include_docs: default_include_docs(),
        }
    }
}

impl ExtractionConfig {
    pub fn is_enabled(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ChunkerError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseFailed(format!("Invalid TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default location or create default
    pub fn load_or_default() -> Result<Self, ChunkerError> {
        let config_path = crate::paths::PlatformPaths::default_config_path();

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            tracing::debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<(), ChunkerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::SaveFailed(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveFailed(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ChunkerError> {
        if self.extraction.languages.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "extraction.languages".to_string(),
                reason: "must list at least one language".to_string(),
            }
            .into());
        }

        if self.walker.max_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "walker.max_depth".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.walker.max_file_size == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "walker.max_file_size".to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("CODE_CHUNKER_FOLLOW_LINKS")
            && let Some(flag) = parse_bool(&value)
        {
            self.walker.follow_links = flag;
        }

        if let Ok(value) = std::env::var("CODE_CHUNKER_SORT_BY_FILE_NAME")
            && let Some(flag) = parse_bool(&value)
        {
            self.walker.sort_by_file_name = flag;
        }

        if let Ok(value) = std::env::var("CODE_CHUNKER_MAX_DEPTH")
            && let Ok(depth) = value.parse()
        {
            self.walker.max_depth = Some(depth);
        }

        if let Ok(value) = std::env::var("CODE_CHUNKER_MAX_FILE_SIZE")
            && let Ok(size) = value.parse()
        {
            self.walker.max_file_size = Some(size);
        }

        if let Ok(value) = std::env::var("CODE_CHUNKER_INCLUDE_DOCS")
            && let Some(flag) = parse_bool(&value)
        {
            self.extraction.include_docs = flag;
        }
    }

    /// Create a new Config with defaults and environment overrides
    pub fn new() -> Result<Self, ChunkerError> {
        Self::load(None)
    }

    /// Load from an explicit file when given, otherwise from the default location
    pub fn load(path: Option<&Path>) -> Result<Self, ChunkerError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::load_or_default()?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.walker.follow_links);
        assert!(!config.walker.sort_by_file_name);
        assert!(config.walker.max_depth.is_none());
        assert!(config.walker.max_file_size.is_none());
        assert_eq!(config.extraction.languages, Language::ALL.to_vec());
        assert!(config.extraction.include_docs);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_languages() {
        let mut config = Config::default();
        config.extraction.languages.clear();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ChunkerError::Config(ConfigError::InvalidValue { .. })
        ));
        assert!(err.to_string().contains("extraction.languages"));
    }

    #[test]
    fn test_validate_zero_limits() {
        let mut config = Config::default();
        config.walker.max_depth = Some(0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.walker.max_file_size = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        let mut config = Config::default();
        config.walker.sort_by_file_name = true;
        config.walker.max_depth = Some(4);
        config.extraction.languages = vec![Language::Python, Language::Tsx];

        config.save(path).unwrap();
        let loaded = Config::from_file(path).unwrap();

        assert!(loaded.walker.sort_by_file_name);
        assert_eq!(loaded.walker.max_depth, Some(4));
        assert_eq!(
            loaded.extraction.languages,
            vec![Language::Python, Language::Tsx]
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(
            result.unwrap_err(),
            ChunkerError::Config(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "walker = [not toml").unwrap();

        let result = Config::from_file(temp_file.path());
        assert!(matches!(
            result.unwrap_err(),
            ChunkerError::Config(ConfigError::ParseFailed(_))
        ));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "[walker]\nfollow_links = true\n").unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert!(config.walker.follow_links);
        assert_eq!(config.extraction.languages.len(), 5);
        assert!(config.extraction.include_docs);
    }

    #[test]
    fn test_toml_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("follow_links"));
        assert!(toml_str.contains("languages"));
        assert!(toml_str.contains("\"typescript\""));
    }

    #[test]
    fn test_apply_env_overrides() {
        // Safety: only this test touches the CODE_CHUNKER_* variables
        unsafe {
            std::env::set_var("CODE_CHUNKER_FOLLOW_LINKS", "true");
            std::env::set_var("CODE_CHUNKER_SORT_BY_FILE_NAME", "1");
            std::env::set_var("CODE_CHUNKER_MAX_DEPTH", "3");
            std::env::set_var("CODE_CHUNKER_MAX_FILE_SIZE", "2048");
            std::env::set_var("CODE_CHUNKER_INCLUDE_DOCS", "off");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert!(config.walker.follow_links);
        assert!(config.walker.sort_by_file_name);
        assert_eq!(config.walker.max_depth, Some(3));
        assert_eq!(config.walker.max_file_size, Some(2048));
        assert!(!config.extraction.include_docs);

        unsafe {
            std::env::remove_var("CODE_CHUNKER_FOLLOW_LINKS");
            std::env::remove_var("CODE_CHUNKER_SORT_BY_FILE_NAME");
            std::env::remove_var("CODE_CHUNKER_MAX_DEPTH");
            std::env::remove_var("CODE_CHUNKER_MAX_FILE_SIZE");
            std::env::remove_var("CODE_CHUNKER_INCLUDE_DOCS");
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" no "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_extraction_is_enabled() {
        let extraction = ExtractionConfig {
            languages: vec![Language::Python],
            include_docs: true,
        };
        assert!(extraction.is_enabled(Language::Python));
        assert!(!extraction.is_enabled(Language::Jsx));
    }
}
