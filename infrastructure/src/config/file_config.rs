//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! Example configuration:
//!
//! ```toml
//! [storage]
//! backend = "json"
//! path = "trivia.json"
//! seed = "seed/questions.json"
//!
//! [quiz]
//! rng_seed = 42
//! rounds = 5
//!
//! [output]
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use trivia_domain::OutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("quiz.rounds cannot be 0")]
    ZeroRounds,

    #[error("storage.path cannot be empty")]
    EmptyStorePath,

    #[error("storage.path is required for the json backend")]
    MissingStorePath,

    #[error("storage.seed cannot be empty")]
    EmptySeedPath,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Seeded on every start, nothing persisted
    #[default]
    Memory,
    /// JSON snapshot file
    Json,
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: StorageBackend,
    /// Snapshot file for the `json` backend
    pub path: Option<PathBuf>,
    /// Seed file; the built-in seed is used when unset
    pub seed: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Snapshot path for the `json` backend
    pub fn json_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Seed for reproducible draws; OS entropy when unset
    pub rng_seed: Option<u64>,
    /// Questions per interactive quiz
    pub rounds: usize,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            rounds: 5,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub storage: FileStorageConfig,
    pub quiz: FileQuizConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.quiz.rounds == 0 {
            return Err(ConfigValidationError::ZeroRounds);
        }
        if self
            .storage
            .path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigValidationError::EmptyStorePath);
        }
        if self.storage.backend == StorageBackend::Json && self.storage.path.is_none() {
            return Err(ConfigValidationError::MissingStorePath);
        }
        if self
            .storage
            .seed
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigValidationError::EmptySeedPath);
        }
        Ok(())
    }
}
