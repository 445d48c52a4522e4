//! Question service use case
//!
//! Orchestrates listing, searching, mutation and quiz draws over the
//! question repository.

use super::error::QuizError;
use super::quiz_selector::QuizSelector;
use crate::ports::question_repository::{QuestionRepository, RepositoryError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{
    CategoryId, CategoryIndex, DomainError, NewQuestion, PageRequest, Question, QuestionId,
    QuizDrawRequest, RandomSource, SearchTerm, paginate,
};

/// Caller-supplied fields for a new question; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i64>,
}

impl CreateQuestionInput {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<CategoryId>,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category.into()),
            difficulty: Some(difficulty),
        }
    }
}

/// One page of the full question listing
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryIndex,
    pub page: PageRequest,
}

/// All questions in one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: CategoryId,
}

/// One page of search matches
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// Matches across all pages
    pub total_questions: usize,
    /// Distinct categories of the questions on this page, ascending
    pub current_categories: Vec<CategoryId>,
    pub categories: CategoryIndex,
    pub page: PageRequest,
}

/// Use case for browsing, editing and drawing quiz questions
pub struct QuestionService<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
    selector: QuizSelector<R>,
}

impl<R: QuestionRepository + ?Sized + 'static> QuestionService<R> {
    pub fn new(repository: Arc<R>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            selector: QuizSelector::new(Arc::clone(&repository), rng),
            repository,
        }
    }

    /// All categories, ordered by display name
    pub async fn list_categories(&self) -> Result<CategoryIndex, QuizError> {
        let index = self.category_index().await?;
        if index.is_empty() {
            return Err(QuizError::not_found("no categories"));
        }
        Ok(index)
    }

    /// A page of all questions ordered by id.
    ///
    /// An empty page, including one past the end, is `NotFound`.
    pub async fn list_questions(&self, page: PageRequest) -> Result<QuestionPage, QuizError> {
        let questions = self.all_questions().await?;
        let categories = self.category_index().await?;

        let current = paginate(&questions, page);
        debug!(
            "Listing page {}: {} of {} questions",
            page.number(),
            current.len(),
            questions.len()
        );

        if current.is_empty() {
            return Err(QuizError::not_found(format!(
                "no questions on page {}",
                page.number()
            )));
        }

        Ok(QuestionPage {
            questions: current.to_vec(),
            total_questions: questions.len(),
            categories,
            page,
        })
    }

    /// Validate and store a new question
    pub async fn create_question(&self, input: CreateQuestionInput) -> Result<Question, QuizError> {
        let new = NewQuestion::from_fields(
            input.question,
            input.answer,
            input.category,
            input.difficulty,
        )?;

        let categories = self.category_index().await?;
        if !categories.exists(new.category()) {
            return Err(DomainError::UnknownCategory(new.category()).into());
        }

        let id = self.repository.insert(new.clone()).await?;
        info!("Created question {} in category {}", id, new.category());

        Ok(Question::from_new(id, new))
    }

    pub async fn delete_question(&self, id: QuestionId) -> Result<(), QuizError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(QuizError::not_found(format!("question {}", id)));
        }

        // A concurrent delete may win between the lookup and here
        if !self.repository.delete(id).await? {
            return Err(QuizError::not_found(format!("question {}", id)));
        }

        info!("Deleted question {}", id);
        Ok(())
    }

    /// Every question in a category.
    ///
    /// An unknown category and a category without questions are both `NotFound`.
    pub async fn questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<CategoryQuestions, QuizError> {
        let mut questions = self.repository.list_by_category(category).await?;
        if questions.is_empty() {
            return Err(QuizError::not_found(format!(
                "no questions in category {}",
                category
            )));
        }
        questions.sort_by_key(|q| q.id);

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category: category,
        })
    }

    /// Case-insensitive search over question text.
    ///
    /// No match anywhere is `NotFound`. When matches exist but `page` is past
    /// the last one, the result has an empty page and the real total.
    pub async fn search(
        &self,
        term: &SearchTerm,
        page: PageRequest,
    ) -> Result<SearchResults, QuizError> {
        let matches: Vec<Question> = self
            .all_questions()
            .await?
            .into_iter()
            .filter(|q| term.matches(&q.text))
            .collect();

        debug!("Search {:?}: {} matches", term.as_str(), matches.len());

        if matches.is_empty() {
            return Err(QuizError::not_found(format!(
                "no questions matching {:?}",
                term.as_str()
            )));
        }

        let current = paginate(&matches, page).to_vec();
        let mut current_categories: Vec<CategoryId> = current.iter().map(|q| q.category).collect();
        current_categories.sort();
        current_categories.dedup();

        Ok(SearchResults {
            questions: current,
            total_questions: matches.len(),
            current_categories,
            categories: self.category_index().await?,
            page,
        })
    }

    /// Draw one unseen question
    pub async fn draw_quiz_question(
        &self,
        request: &QuizDrawRequest,
    ) -> Result<Question, QuizError> {
        self.selector.draw(request).await
    }

    async fn all_questions(&self) -> Result<Vec<Question>, QuizError> {
        let mut questions = self.repository.list_all().await?;
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn category_index(&self) -> Result<CategoryIndex, QuizError> {
        let categories = self.repository.list_categories().await?;
        CategoryIndex::new(categories)
            .map_err(|e| RepositoryError::Corrupted(e.to_string()).into())
    }
}
