//! In-memory question repository

use super::seed::{SeedData, SeedError};
use super::state::StoreState;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use trivia_application::{QuestionRepository, RepositoryError};
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Question repository held entirely in process memory.
///
/// Contents are lost when the process exits.
pub struct InMemoryQuestionRepository {
    state: RwLock<StoreState>,
}

impl InMemoryQuestionRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            state: RwLock::new(StoreState::new(categories)),
        }
    }

    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let state = StoreState::from_seed(seed)?;
        debug!(
            "In-memory store seeded with {} questions, {} categories",
            state.len(),
            state.categories().len()
        );
        Ok(Self {
            state: RwLock::new(state),
        })
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        Ok(self.state.write().await.insert(question))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        Ok(self.state.write().await.delete(id))
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

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::Difficulty;

    fn new_question(text: &str, category: u64) -> NewQuestion {
        NewQuestion::new(text, "answer", CategoryId::new(category), Difficulty::new(3).unwrap())
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_find_delete() {
        let repo = InMemoryQuestionRepository::new(vec![Category::new(1, "Science")]);

        let id = repo.insert(new_question("What is H2O?", 1)).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.text, "What is H2O?");

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let repo =
            InMemoryQuestionRepository::new(vec![Category::new(1, "A"), Category::new(2, "B")]);
        repo.insert(new_question("one", 1)).await.unwrap();
        repo.insert(new_question("two", 1)).await.unwrap();
        repo.insert(new_question("three", 2)).await.unwrap();

        let ids: Vec<_> = repo
            .list_by_category(CategoryId::new(1))
            .await
            .unwrap()
            .iter()
            .map(|q| q.id.value())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(repo.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_from_builtin_seed() {
        let repo = InMemoryQuestionRepository::from_seed(SeedData::builtin().unwrap()).unwrap();
        assert_eq!(repo.list_categories().await.unwrap().len(), 6);
        assert!(!repo.list_all().await.unwrap().is_empty());
    }
}
