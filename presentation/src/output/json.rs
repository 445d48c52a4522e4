//! JSON envelope formatter
//!
//! Every response carries a `success` flag. Failures add the error kind and
//! a human-readable message:
//!
//! ```json
//! { "success": false, "error": "not_found", "message": "Not found: question 9" }
//! ```

use super::formatter::OutputFormatter;
use crate::cli::request::Outcome;
use serde_json::{Value, json};
use trivia_application::QuizError;

/// Formats outcomes as JSON envelopes
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn envelope(outcome: &Outcome) -> Value {
        match outcome {
            Outcome::Categories(index) => json!({
                "success": true,
                "categories": index,
            }),
            Outcome::Questions(page) => json!({
                "success": true,
                "questions": page.questions,
                "total_questions": page.total_questions,
                "categories": page.categories,
                "page": page.page,
            }),
            Outcome::Created(question) => json!({
                "success": true,
                "created": question.id,
                "question": question,
            }),
            Outcome::Deleted(id) => json!({
                "success": true,
                "deleted": id,
            }),
            Outcome::ByCategory(result) => json!({
                "success": true,
                "questions": result.questions,
                "total_questions": result.total_questions,
                "current_category": result.current_category,
            }),
            Outcome::Search(results) => json!({
                "success": true,
                "questions": results.questions,
                "total_questions": results.total_questions,
                "current_category": results.current_categories,
                "categories": results.categories,
                "page": results.page,
            }),
            Outcome::Drawn(question) => json!({
                "success": true,
                "question": question,
            }),
        }
    }

    pub fn error_envelope(error: &QuizError) -> Value {
        json!({
            "success": false,
            "error": error.kind(),
            "message": error.to_string(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &Outcome) -> String {
        serde_json::to_string_pretty(&Self::envelope(outcome)).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_error(&self, error: &QuizError) -> String {
        serde_json::to_string_pretty(&Self::error_envelope(error))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_question;
    use trivia_domain::{DomainError, QuestionId};

    #[test]
    fn test_drawn_envelope() {
        let question = sample_question(4, 2, "Capital of Peru?", "Lima");
        let value = JsonFormatter::envelope(&Outcome::Drawn(question));
        assert_eq!(value["success"], true);
        assert_eq!(value["question"]["id"], 4);
        assert_eq!(value["question"]["question"], "Capital of Peru?");
    }

    #[test]
    fn test_deleted_envelope() {
        let value = JsonFormatter::envelope(&Outcome::Deleted(QuestionId::new(9)));
        assert_eq!(value, json!({ "success": true, "deleted": 9 }));
    }

    #[test]
    fn test_error_envelope() {
        let value =
            JsonFormatter::error_envelope(&QuizError::from(DomainError::EmptyField("answer")));
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "invalid_input");
        assert_eq!(value["message"], "Invalid input: Field cannot be empty: answer");
    }

    #[test]
    fn test_format_is_valid_json() {
        let output = JsonFormatter.format(&Outcome::Deleted(QuestionId::new(1)));
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["deleted"], 1);
    }
}
