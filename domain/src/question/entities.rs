//! Question entities and value objects

use crate::category::CategoryId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Question identifier, assigned by the repository on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Difficulty rating (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::DifficultyOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored trivia question (Entity)
///
/// Questions are never edited in place: they are inserted once and may later
/// be deleted by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl Question {
    /// Attach the repository-assigned id to a validated draft
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            text: new.text,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// A question that passed validation but has no id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let answer = answer.into();

        if text.trim().is_empty() {
            return Err(DomainError::EmptyField("question"));
        }
        if answer.trim().is_empty() {
            return Err(DomainError::EmptyField("answer"));
        }

        Ok(Self {
            text,
            answer,
            category,
            difficulty,
        })
    }

    /// Validate loosely-typed caller input (every field optional)
    pub fn from_fields(
        text: Option<String>,
        answer: Option<String>,
        category: Option<CategoryId>,
        difficulty: Option<i64>,
    ) -> Result<Self, DomainError> {
        let text = text.ok_or(DomainError::MissingField("question"))?;
        let answer = answer.ok_or(DomainError::MissingField("answer"))?;
        let category = category.ok_or(DomainError::MissingField("category"))?;
        let difficulty = difficulty.ok_or(DomainError::MissingField("difficulty"))?;

        Self::new(text, answer, category, Difficulty::new(difficulty)?)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
