//! Shared mocks for use case tests

use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use trivia_domain::{
    Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId, RandomSource,
};

pub fn question(id: u64, category: u64) -> Question {
    question_with_text(id, category, &format!("Question number {id}"))
}

pub fn question_with_text(id: u64, category: u64, text: &str) -> Question {
    let new = NewQuestion::new(
        text,
        format!("Answer {id}"),
        CategoryId::new(category),
        Difficulty::new(1).unwrap(),
    )
    .unwrap();
    Question::from_new(QuestionId::new(id), new)
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
    ]
}

pub struct MockRepository {
    questions: Mutex<Vec<Question>>,
    categories: Vec<Category>,
    next_id: Mutex<u64>,
    fail: bool,
}

impl MockRepository {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self::new(questions, default_categories())
    }

    pub fn new(questions: Vec<Question>, categories: Vec<Category>) -> Self {
        let next_id = questions.iter().map(|q| q.id.value()).max().unwrap_or(0) + 1;
        Self {
            questions: Mutex::new(questions),
            categories,
            next_id: Mutex::new(next_id),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_questions(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            Err(RepositoryError::Unavailable("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl QuestionRepository for MockRepository {
    async fn insert(&self, question: NewQuestion) -> Result<QuestionId, RepositoryError> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        let id = QuestionId::new(*next_id);
        *next_id += 1;
        self.questions
            .lock()
            .unwrap()
            .push(Question::from_new(id, question));
        Ok(id)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        // Reverse order so callers that forget to sort get caught
        Ok(self.questions.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn list_by_category(&self, id: CategoryId) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.check()?;
        Ok(self.categories.clone())
    }
}

/// Returns pre-scripted indices, cycling when exhausted
pub struct ScriptedRandom {
    script: Mutex<VecDeque<usize>>,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script: Mutex::new(VecDeque::from(script)),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&self, upper: usize) -> usize {
        let mut script = self.script.lock().unwrap();
        let next = script.pop_front().unwrap_or(0);
        script.push_back(next);
        next % upper
    }
}
