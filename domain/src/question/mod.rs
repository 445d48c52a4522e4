//! Trivia questions.
//!
//! - [`Question`]: a stored question with its assigned id
//! - [`NewQuestion`]: a validated draft, ready to be inserted
//! - [`Difficulty`]: difficulty rating in `1..=5`

pub mod entities;

pub use entities::{Difficulty, NewQuestion, Question, QuestionId};
