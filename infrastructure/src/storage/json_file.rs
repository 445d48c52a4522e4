//! JSON file backed question repository
//!
//! The whole store is kept in memory and written back as a single snapshot
//! after every insert or delete. Writes go to a sibling temp file which is
//! then renamed over the snapshot.

use super::seed::{SeedData, SeedError};
use super::state::StoreState;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use trivia_application::{QuestionRepository, RepositoryError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Errors opening or writing the snapshot file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No store path configured for the json backend")]
    MissingPath,

    #[error("Failed to encode store: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl From<StoreError> for RepositoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Malformed { .. } => RepositoryError::Corrupted(e.to_string()),
            _ => RepositoryError::Storage(e.to_string()),
        }
    }
}

/// Question repository persisted to a JSON snapshot file
pub struct JsonFileQuestionRepository {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileQuestionRepository {
    /// Open the store at `path`, creating it from `seed` when the file is missing
    pub async fn open(path: impl Into<PathBuf>, seed: SeedData) -> Result<Self, StoreError> {
        let path = path.into();

        let state = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let state: StoreState =
                    serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                        path: path.clone(),
                        source,
                    })?;
                debug!("Opened store {} ({} questions)", path.display(), state.len());
                state
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Store {} not found, creating it from seed data", path.display());
                let state = StoreState::from_seed(seed)?;
                write_snapshot(&path, &state).await?;
                state
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy, persist it, then swap it in.
    ///
    /// The write lock is held throughout so mutations are serialized and a
    /// failed write leaves the in-memory state untouched.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut StoreState) -> T,
    ) -> Result<T, RepositoryError> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let result = change(&mut next);
        write_snapshot(&self.path, &next).await?;
        *guard = next;
        Ok(result)
    }
}

async fn write_snapshot(path: &Path, state: &StoreState) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(state).map_err(StoreError::Encode)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[async_trait]
impl QuestionRepository for JsonFileQuestionRepository {
    async fn insert(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        let id = self.mutate(|state| state.insert(question)).await?;
        info!("Persisted question {} to {}", id, self.path.display());
        Ok(id)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        if self.state.read().await.find(id).is_none() {
            return Ok(false);
        }
        self.mutate(|state| state.delete(id)).await
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.state.read().await.find(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.state.read().await.questions().cloned().collect())
    }

    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.state.read().await.in_category(id).cloned().collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.state.read().await.categories().to_vec())
    }
}
