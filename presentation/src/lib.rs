//! Presentation layer for trivia
//!
//! This crate contains the CLI definition, the request gateway that maps
//! commands onto the question service, output formatters and the
//! interactive quiz loop.

pub mod cli;
pub mod output;
pub mod quiz;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputArg};
pub use cli::request::{Outcome, Request, RequestHandler};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;
pub use quiz::{QuizRepl, QuizSession};
