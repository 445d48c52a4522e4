//! Seed data for the question stores
//!
//! Seed files are JSON documents with the same column names the question and
//! category records have always been stored under:
//!
//! ```json
//! {
//!   "categories": [{ "id": 1, "type": "Science" }],
//!   "questions": [
//!     { "question": "Who discovered penicillin?", "answer": "Alexander Fleming",
//!       "category": 1, "difficulty": 3 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use trivia_domain::{Category, CategoryId, CategoryIndex, DomainError, NewQuestion};

const DEFAULT_SEED: &str = include_str!("default_seed.json");

/// Errors while reading or validating seed data
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed question #{index}: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("Invalid seed categories: {0}")]
    InvalidCategories(#[source] DomainError),
}

/// A question as written in a seed file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i64>,
}

/// Raw seed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub questions: Vec<SeedQuestion>,
}

impl SeedData {
    /// The built-in seed: six categories and a starter set of questions
    pub fn builtin() -> Result<Self, SeedError> {
        Self::parse(DEFAULT_SEED)
    }

    pub fn parse(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded seed file {}", path.display());
        Self::parse(&content)
    }

    /// Load from `path` when given, otherwise the built-in seed
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// Validate categories and every question, in file order
    pub fn validate(self) -> Result<(Vec<Category>, Vec<NewQuestion>), SeedError> {
        let index =
            CategoryIndex::new(self.categories.clone()).map_err(SeedError::InvalidCategories)?;

        let questions = self
            .questions
            .into_iter()
            .enumerate()
            .map(|(index_in_file, q)| {
                let new =
                    NewQuestion::from_fields(q.question, q.answer, q.category, q.difficulty)
                        .map_err(|source| SeedError::InvalidQuestion {
                            index: index_in_file,
                            source,
                        })?;
                if !index.exists(new.category()) {
                    return Err(SeedError::InvalidQuestion {
                        index: index_in_file,
                        source: DomainError::UnknownCategory(new.category()),
                    });
                }
                Ok(new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((self.categories, questions))
    }
}
