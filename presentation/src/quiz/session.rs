//! Quiz session state kept by the caller between draws

use std::collections::HashSet;
use trivia_domain::{CategoryFilter, Question, QuestionId, QuizDrawRequest};

/// Seen questions and round count for one interactive quiz
///
/// The question service is stateless; each draw is sent the full set of
/// question ids this session has already shown.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: CategoryFilter,
    seen: HashSet<QuestionId>,
    rounds: usize,
    played: usize,
}

impl QuizSession {
    pub fn new(category: CategoryFilter, rounds: usize) -> Self {
        Self {
            category,
            seen: HashSet::new(),
            rounds,
            played: 0,
        }
    }

    /// Draw request for the next round
    pub fn next_request(&self) -> QuizDrawRequest {
        QuizDrawRequest::new(self.category).excluding(self.seen.iter().copied())
    }

    /// Mark a drawn question as played
    pub fn record(&mut self, question: &Question) {
        if self.seen.insert(question.id) {
            self.played += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.played >= self.rounds
    }

    pub fn played(&self) -> usize {
        self.played
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }
}

/// Lenient answer check: case and punctuation are ignored, and the guess must
/// contain every word of the stored answer.
pub fn answer_matches(answer: &str, guess: &str) -> bool {
    let expected = words(answer);
    let given = words(guess);
    !expected.is_empty() && expected.is_subset(&given)
}

fn words(text: &str) -> HashSet<String> {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_question;
    use trivia_domain::CategoryId;

    #[test]
    fn test_first_request_excludes_nothing() {
        let session = QuizSession::new(CategoryFilter::Only(CategoryId::new(2)), 5);
        let request = session.next_request();
        assert_eq!(request.category, CategoryFilter::Only(CategoryId::new(2)));
        assert!(request.excluded.is_empty());
    }

    #[test]
    fn test_recorded_questions_are_excluded() {
        let mut session = QuizSession::new(CategoryFilter::Any, 5);
        session.record(&sample_question(4, 1, "Q4", "A"));
        session.record(&sample_question(9, 2, "Q9", "A"));

        let request = session.next_request();
        assert_eq!(request.excluded.len(), 2);
        assert!(request.excluded.contains(&QuestionId::new(4)));
        assert!(request.excluded.contains(&QuestionId::new(9)));
        assert_eq!(session.played(), 2);
    }

    #[test]
    fn test_finishes_after_rounds() {
        let mut session = QuizSession::new(CategoryFilter::Any, 2);
        session.record(&sample_question(1, 1, "Q1", "A"));
        assert!(!session.is_finished());
        // Same question twice does not count as a new round
        session.record(&sample_question(1, 1, "Q1", "A"));
        assert!(!session.is_finished());
        session.record(&sample_question(2, 1, "Q2", "A"));
        assert!(session.is_finished());
    }

    #[test]
    fn test_answer_matches() {
        assert!(answer_matches("Lake Victoria", "lake victoria"));
        assert!(answer_matches("Lake Victoria", "  Victoria, Lake! "));
        assert!(answer_matches("Alexander Fleming", "I think it was Alexander Fleming"));
        assert!(answer_matches("Mona Lisa", "the mona lisa."));
    }

    #[test]
    fn test_partial_guesses_rejected() {
        assert!(!answer_matches("Lake Victoria", "a"));
        assert!(!answer_matches("Lake Victoria", "Victoria"));
        assert!(!answer_matches("Alexander Fleming", "fleming"));
        assert!(!answer_matches("Lake Victoria", "Tanganyika"));
        assert!(!answer_matches("Lake Victoria", "  ?? "));
        assert!(!answer_matches("", "anything"));
    }
}
