//! Transport-agnostic requests and their dispatch to the question service

use std::sync::Arc;
use trivia_application::{
    CategoryQuestions, CreateQuestionInput, QuestionPage, QuestionRepository, QuestionService,
    QuizError, SearchResults,
};
use trivia_domain::{
    CategoryId, CategoryIndex, PageRequest, Question, QuestionId, QuizDrawRequest, SearchTerm,
};

/// One call into the question service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ListCategories,
    ListQuestions(PageRequest),
    CreateQuestion(CreateQuestionInput),
    DeleteQuestion(QuestionId),
    QuestionsByCategory(CategoryId),
    Search(SearchTerm, PageRequest),
    Draw(QuizDrawRequest),
}

/// Successful result of a [`Request`]
#[derive(Debug, Clone)]
pub enum Outcome {
    Categories(CategoryIndex),
    Questions(QuestionPage),
    Created(Question),
    Deleted(QuestionId),
    ByCategory(CategoryQuestions),
    Search(SearchResults),
    Drawn(Question),
}

/// Routes requests to the matching [`QuestionService`] operation
pub struct RequestHandler<R: QuestionRepository + ?Sized + 'static> {
    service: Arc<QuestionService<R>>,
}

impl<R: QuestionRepository + ?Sized + 'static> RequestHandler<R> {
    pub fn new(service: Arc<QuestionService<R>>) -> Self {
        Self { service }
    }

    pub async fn handle(&self, request: Request) -> Result<Outcome, QuizError> {
        let outcome = match request {
            Request::ListCategories => Outcome::Categories(self.service.list_categories().await?),
            Request::ListQuestions(page) => {
                Outcome::Questions(self.service.list_questions(page).await?)
            }
            Request::CreateQuestion(input) => {
                Outcome::Created(self.service.create_question(input).await?)
            }
            Request::DeleteQuestion(id) => {
                self.service.delete_question(id).await?;
                Outcome::Deleted(id)
            }
            Request::QuestionsByCategory(id) => {
                Outcome::ByCategory(self.service.questions_by_category(id).await?)
            }
            Request::Search(term, page) => Outcome::Search(self.service.search(&term, page).await?),
            Request::Draw(draw) => Outcome::Drawn(self.service.draw_quiz_question(&draw).await?),
        };
        Ok(outcome)
    }
}
