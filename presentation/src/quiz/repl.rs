//! REPL for playing a quiz in the terminal

use super::session::{QuizSession, answer_matches};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;
use trivia_application::{QuestionRepository, QuestionService};
use trivia_domain::{CategoryIndex, Question};

/// What the player typed in response to a question
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Guess(String),
    Skip,
    Quit,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "" => None,
            "/quit" | "/exit" | "/q" => Some(Self::Quit),
            "/skip" | "/s" => Some(Self::Skip),
            _ => Some(Self::Guess(line.to_string())),
        }
    }
}

/// Interactive quiz loop
pub struct QuizRepl<R: QuestionRepository + ?Sized + 'static> {
    service: Arc<QuestionService<R>>,
    session: QuizSession,
    categories: Option<CategoryIndex>,
}

impl<R: QuestionRepository + ?Sized + 'static> QuizRepl<R> {
    pub fn new(service: Arc<QuestionService<R>>, session: QuizSession) -> Self {
        Self {
            service,
            session,
            categories: None,
        }
    }

    /// Run until the rounds are played, the pool runs dry, or the player quits
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Category names are only used for display
        self.categories = self.service.list_categories().await.ok();
        self.print_welcome();

        while !self.session.is_finished() {
            let request = self.session.next_request();
            let question = match self.service.draw_quiz_question(&request).await {
                Ok(question) => question,
                Err(e) if e.is_pool_exhausted() => {
                    println!("{}", "No more questions left in this pool.".yellow());
                    break;
                }
                Err(e) => {
                    eprintln!("{}", ConsoleFormatter::format_error(&e));
                    break;
                }
            };

            self.session.record(&question);
            println!();
            println!(
                "{}",
                format!("Round {}/{}", self.session.played(), self.session.rounds()).dimmed()
            );
            println!("{}", ConsoleFormatter::drawn(&question, self.categories.as_ref()));

            if !self.ask(&mut rl, &question)? {
                break;
            }
        }

        self.print_summary();
        Ok(())
    }

    /// Prompt until the player answers, skips or quits; false means quit
    fn ask(&self, rl: &mut DefaultEditor, question: &Question) -> RlResult<bool> {
        loop {
            match rl.readline("answer> ") {
                Ok(line) => match Input::parse(&line) {
                    None => continue,
                    Some(Input::Quit) => return Ok(false),
                    Some(Input::Skip) => {
                        println!("{}", ConsoleFormatter::answer(question));
                        return Ok(true);
                    }
                    Some(Input::Guess(guess)) => {
                        let _ = rl.add_history_entry(guess.as_str());
                        let correct = answer_matches(&question.answer, &guess);
                        debug!(question = %question.id, correct, "Answer checked");
                        if correct {
                            println!("{}", "Correct!".green().bold());
                        } else {
                            println!("{}", "Not quite.".red());
                        }
                        println!("{}", ConsoleFormatter::answer(question));
                        return Ok(true);
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
                Err(err) => return Err(err),
            }
        }
    }

    fn print_welcome(&self) {
        let scope = match (self.session.category().category(), self.categories.as_ref()) {
            (None, _) => "all categories".to_string(),
            (Some(id), Some(index)) => index
                .name(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("category {}", id)),
            (Some(id), None) => format!("category {}", id),
        };
        println!();
        println!("{}", "Trivia quiz".cyan().bold());
        println!(
            "{} rounds from {}. Type an answer, /skip to reveal, /quit to stop.",
            self.session.rounds(),
            scope
        );
    }

    fn print_summary(&self) {
        println!();
        println!(
            "{}",
            format!("Played {} question(s).", self.session.played()).bold()
        );
    }
}
