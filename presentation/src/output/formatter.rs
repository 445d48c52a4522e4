//! Output formatter trait

use crate::cli::request::Outcome;
use trivia_application::QuizError;
use trivia_domain::OutputFormat;

/// Trait for rendering request outcomes
pub trait OutputFormatter {
    /// Format a successful outcome
    fn format(&self, outcome: &Outcome) -> String;

    /// Format a failed request
    fn format_error(&self, error: &QuizError) -> String;
}

/// Formatter for the configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
