//! Application layer for trivia
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::question_repository::{QuestionRepository, RepositoryError};
pub use use_cases::error::{DrawScope, ErrorKind, QuizError};
pub use use_cases::question_service::{
    CategoryQuestions, CreateQuestionInput, QuestionPage, QuestionService, SearchResults,
};
pub use use_cases::quiz_selector::QuizSelector;
