//! Console output formatter for question listings

use super::formatter::OutputFormatter;
use crate::cli::request::Outcome;
use colored::Colorize;
use trivia_application::QuizError;
use trivia_domain::{CategoryIndex, PAGE_SIZE, PageRequest, Question};

/// Formats outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(outcome: &Outcome) -> String {
        match outcome {
            Outcome::Categories(index) => Self::categories(index),
            Outcome::Questions(page) => {
                let mut output = Self::header(&format!(
                    "Questions - page {} of {}",
                    page.page.number(),
                    Self::page_count(page.total_questions)
                ));
                output.push_str(&Self::question_list(&page.questions, Some(&page.categories)));
                output.push_str(&Self::footer(page.page, page.total_questions));
                output
            }
            Outcome::Created(question) => format!(
                "{} question {}\n{}",
                "Created".green().bold(),
                question.id,
                Self::question_line(question, None)
            ),
            Outcome::Deleted(id) => format!("{} question {}", "Deleted".yellow().bold(), id),
            Outcome::ByCategory(result) => {
                let mut output = Self::header(&format!(
                    "Category {} - {} questions",
                    result.current_category, result.total_questions
                ));
                output.push_str(&Self::question_list(&result.questions, None));
                output
            }
            Outcome::Search(results) => {
                let mut output = Self::header(&format!(
                    "Search results - {} matches",
                    results.total_questions
                ));
                if results.questions.is_empty() {
                    output.push_str(&format!(
                        "{}\n",
                        format!("No matches on page {}", results.page.number()).dimmed()
                    ));
                } else {
                    output.push_str(&Self::question_list(
                        &results.questions,
                        Some(&results.categories),
                    ));
                }
                output.push_str(&Self::footer(results.page, results.total_questions));
                output
            }
            Outcome::Drawn(question) => Self::drawn(question, None),
        }
    }

    pub fn format_error(error: &QuizError) -> String {
        let label = match error {
            QuizError::InvalidInput(_) => "Invalid input".red().bold(),
            QuizError::NotFound(_) => "Not found".yellow().bold(),
            QuizError::PoolExhausted { .. } => "Quiz over".cyan().bold(),
            QuizError::Repository(_) => "Storage error".red().bold(),
        };
        let detail = match error {
            QuizError::InvalidInput(e) => e.to_string(),
            QuizError::NotFound(what) => what.clone(),
            QuizError::Repository(e) => e.to_string(),
            QuizError::PoolExhausted { .. } => error.to_string(),
        };
        format!("{}: {}", label, detail)
    }

    /// A drawn quiz question with its answer hidden behind a separator
    pub fn drawn(question: &Question, categories: Option<&CategoryIndex>) -> String {
        format!(
            "{} {}\n{} {}\n{} {}",
            format!("Q{}:", question.id).cyan().bold(),
            question.text,
            "Category:".dimmed(),
            Self::category_label(question, categories),
            "Difficulty:".dimmed(),
            Self::difficulty_stars(question)
        )
    }

    pub fn answer(question: &Question) -> String {
        format!("{} {}", "Answer:".green().bold(), question.answer)
    }

    fn categories(index: &CategoryIndex) -> String {
        let mut output = Self::header("Categories");
        for category in index.iter() {
            output.push_str(&format!("  {:>3}  {}\n", category.id, category.name));
        }
        output
    }

    fn question_list(questions: &[Question], categories: Option<&CategoryIndex>) -> String {
        questions
            .iter()
            .map(|q| format!("{}\n", Self::question_line(q, categories)))
            .collect()
    }

    fn question_line(question: &Question, categories: Option<&CategoryIndex>) -> String {
        format!(
            "  {:>4}  {}  {} {}",
            question.id.to_string().bold(),
            question.text,
            format!("[{}]", Self::category_label(question, categories)).dimmed(),
            Self::difficulty_stars(question).yellow()
        )
    }

    fn category_label(question: &Question, categories: Option<&CategoryIndex>) -> String {
        categories
            .and_then(|index| index.name(question.category))
            .map(str::to_string)
            .unwrap_or_else(|| format!("category {}", question.category))
    }

    fn difficulty_stars(question: &Question) -> String {
        "*".repeat(usize::from(question.difficulty.value()))
    }

    fn page_count(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE).max(1)
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(page: PageRequest, total: usize) -> String {
        format!(
            "{}\n",
            format!(
                "page {}/{} - {} total",
                page.number(),
                Self::page_count(total),
                total
            )
            .dimmed()
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &Outcome) -> String {
        Self::format(outcome)
    }

    fn format_error(&self, error: &QuizError) -> String {
        Self::format_error(error)
    }
}
