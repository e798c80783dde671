//! Configuration loading and management for docsumma.
//!
//! Loads settings from `docsumma.toml`. Every field has a default, so running
//! without a config file is fine.

use crate::analysis::DEFAULT_MIN_TEXT_CHARS;
use crate::extract::DEFAULT_MAX_FILE_BYTES;
use crate::questions::DEFAULT_MAX_QUESTIONS;
use crate::summary::DEFAULT_SUMMARY_SENTENCES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "DOCSUMMA_CONFIG";

const CONFIG_FILE: &str = "docsumma.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Text analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Sentences kept in the summary
    pub summary_sentences: usize,
    /// Upper bound on generated questions
    pub max_questions: usize,
    /// Cleaned text shorter than this is rejected
    pub min_text_chars: usize,
}

/// Input file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Largest file accepted, in bytes
    pub max_file_bytes: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from the default location, or defaults if none exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // An explicit path wins, even if it does not exist yet (will error on read)
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::home_dir()
            .map(|home| home.join(".config").join("docsumma").join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    /// Reject settings that would make every analysis empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.summary_sentences == 0 {
            return Err(ConfigError::Invalid("analysis.summary_sentences must be > 0".into()));
        }
        if self.analysis.max_questions == 0 {
            return Err(ConfigError::Invalid("analysis.max_questions must be > 0".into()));
        }
        if self.input.max_file_bytes == 0 {
            return Err(ConfigError::Invalid("input.max_file_bytes must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_sentences: DEFAULT_SUMMARY_SENTENCES,
            max_questions: DEFAULT_MAX_QUESTIONS,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_original_limits() {
        let config = Config::default();
        assert_eq!(config.analysis.summary_sentences, 6);
        assert_eq!(config.analysis.max_questions, 6);
        assert_eq!(config.analysis.min_text_chars, 200);
        assert_eq!(config.input.max_file_bytes, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let (_dir, path) = write_config("[analysis]\nsummary_sentences = 3\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analysis.summary_sentences, 3);
        assert_eq!(config.analysis.max_questions, 6);
        assert_eq!(config.input.max_file_bytes, DEFAULT_MAX_FILE_BYTES);
    }

    #[test]
    fn empty_file_is_default() {
        let (_dir, path) = write_config("");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analysis.min_text_chars, DEFAULT_MIN_TEXT_CHARS);
    }

    #[test]
    fn rejects_zero_counts() {
        let (_dir, path) = write_config("[analysis]\nmax_questions = 0\n");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reports_parse_errors() {
        let (_dir, path) = write_config("[analysis\nsummary_sentences = ");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
