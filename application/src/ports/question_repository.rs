//! Question repository port
//!
//! Defines the storage operations the use cases rely on.

use async_trait::async_trait;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use thiserror::Error;

/// Errors surfaced by a storage adapter.
///
/// The use cases never interpret these; they are wrapped and passed up.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupted data: {0}")]
    Corrupted(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Storage for questions and categories
///
/// Every call is atomic on its own; no transaction spans multiple calls.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a validated question and return its newly assigned id
    async fn insert(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError>;

    /// Delete by id; `false` if no such question existed
    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError>;

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// All questions, in no guaranteed order
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError>;

    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, RepositoryError>;

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError>;
}
