//! Test doubles for the presentation layer

use crate::cli::request::RequestHandler;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trivia_application::{QuestionRepository, QuestionService, RepositoryError};
use trivia_domain::{
    Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId, RandomSource,
};

pub struct FirstIndex;

impl RandomSource for FirstIndex {
    fn next_index(&self, _upper: usize) -> usize {
        0
    }
}

pub struct VecRepository {
    questions: Mutex<Vec<Question>>,
    categories: Vec<Category>,
}

#[async_trait]
impl QuestionRepository for VecRepository {
    async fn insert(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let id = QuestionId::new(questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1);
        questions.push(Question::from_new(id, question));
        Ok(id)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(before != questions.len())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.questions.lock().unwrap().iter().find(|q| q.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, RepositoryError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.categories.clone())
    }
}

pub fn sample_question(id: u64, category: u64, text: &str, answer: &str) -> Question {
    let new = NewQuestion::new(text, answer, CategoryId::new(category), Difficulty::new(2).unwrap())
        .unwrap();
    Question::from_new(QuestionId::new(id), new)
}

/// Categories 1 (Science) and 2 (Geography); questions 1, 2 in Science, 3 in Geography
pub fn seeded_repository() -> VecRepository {
    VecRepository {
        questions: Mutex::new(vec![
            sample_question(1, 1, "What is the heaviest organ in the human body?", "The Liver"),
            sample_question(2, 1, "Who discovered penicillin?", "Alexander Fleming"),
            sample_question(3, 2, "What is the largest lake in Africa?", "Lake Victoria"),
        ]),
        categories: vec![Category::new(1, "Science"), Category::new(2, "Geography")],
    }
}

pub fn service(repo: VecRepository) -> Arc<QuestionService<VecRepository>> {
    Arc::new(QuestionService::new(Arc::new(repo), Arc::new(FirstIndex)))
}

pub fn handler(repo: VecRepository) -> RequestHandler<VecRepository> {
    RequestHandler::new(service(repo))
}
