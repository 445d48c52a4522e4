//! Question repository adapters
//!
//! - [`InMemoryQuestionRepository`]: process-local, seeded on startup
//! - [`JsonFileQuestionRepository`]: snapshot persisted to a JSON file

mod in_memory;
mod json_file;
mod seed;
mod state;

pub use in_memory::InMemoryQuestionRepository;
pub use json_file::{JsonFileQuestionRepository, StoreError};
pub use seed::{SeedData, SeedError, SeedQuestion};
pub use state::StoreState;

use crate::config::{FileStorageConfig, StorageBackend};
use std::sync::Arc;
use trivia_application::QuestionRepository;

/// Open the repository described by the `[storage]` config section
pub async fn open_repository(
    config: &FileStorageConfig,
) -> Result<Arc<dyn QuestionRepository>, StoreError> {
    let seed = SeedData::load(config.seed.as_deref())?;

    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryQuestionRepository::from_seed(seed)?)),
        StorageBackend::Json => {
            let path = config.json_path().ok_or(StoreError::MissingPath)?;
            Ok(Arc::new(JsonFileQuestionRepository::open(path, seed).await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_backend() {
        let repo = open_repository(&FileStorageConfig::default()).await.unwrap();
        assert!(!repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_json_backend() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileStorageConfig {
            backend: StorageBackend::Json,
            path: Some(dir.path().join("trivia.json")),
            seed: None,
        };
        let repo = open_repository(&config).await.unwrap();
        assert_eq!(repo.list_categories().await.unwrap().len(), 6);
        assert!(dir.path().join("trivia.json").exists());
    }

    #[tokio::test]
    async fn test_open_json_backend_without_path() {
        let config = FileStorageConfig {
            backend: StorageBackend::Json,
            path: None,
            seed: None,
        };
        let result = open_repository(&config).await;
        assert!(matches!(result, Err(StoreError::MissingPath)));
    }
}
