//! Domain error types

use crate::category::CategoryId;
use thiserror::Error;

/// Domain-level validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    #[error("Difficulty must be between {min} and {max}, got {value}")]
    DifficultyOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(CategoryId),
}

impl DomainError {
    /// Name of the offending field, if the error is about a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::MissingField(field) | DomainError::EmptyField(field) => Some(field),
            DomainError::DifficultyOutOfRange { .. } => Some("difficulty"),
            DomainError::UnknownCategory(_) => Some("category"),
            DomainError::DuplicateCategory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = DomainError::MissingField("answer");
        assert_eq!(error.to_string(), "Missing required field: answer");
    }

    #[test]
    fn test_difficulty_display() {
        let error = DomainError::DifficultyOutOfRange {
            value: 9,
            min: 1,
            max: 5,
        };
        assert_eq!(
            error.to_string(),
            "Difficulty must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(DomainError::EmptyField("question").field(), Some("question"));
        assert_eq!(
            DomainError::UnknownCategory(CategoryId::new(7)).field(),
            Some("category")
        );
        assert_eq!(DomainError::DuplicateCategory(CategoryId::new(1)).field(), None);
    }
}
