//! Error taxonomy shared by the question use cases

use crate::ports::question_repository::RepositoryError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use trivia_domain::{CategoryFilter, DomainError};

/// Errors returned by [`QuestionService`](super::question_service::QuestionService)
/// and [`QuizSelector`](super::quiz_selector::QuizSelector)
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No unseen questions left ({category}, {excluded} excluded)")]
    PoolExhausted {
        category: DrawScope,
        excluded: usize,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl QuizError {
    pub fn not_found(what: impl Into<String>) -> Self {
        QuizError::NotFound(what.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::InvalidInput(_) => ErrorKind::InvalidInput,
            QuizError::NotFound(_) => ErrorKind::NotFound,
            QuizError::PoolExhausted { .. } => ErrorKind::PoolExhausted,
            QuizError::Repository(_) => ErrorKind::Repository,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::NotFound(_))
    }

    pub fn is_pool_exhausted(&self) -> bool {
        matches!(self, QuizError::PoolExhausted { .. })
    }
}

/// Stable tag for each failure kind, used in error envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    PoolExhausted,
    Repository,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::PoolExhausted => "pool_exhausted",
            ErrorKind::Repository => "repository",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display wrapper for the category filter of an exhausted draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawScope(pub CategoryFilter);

impl fmt::Display for DrawScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            CategoryFilter::Any => f.write_str("any category"),
            CategoryFilter::Only(id) => write!(f, "category {}", id),
        }
    }
}
