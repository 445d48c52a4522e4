//! CLI command definitions

use super::request::Request;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use trivia_application::CreateQuestionInput;
use trivia_domain::{
    CategoryFilter, CategoryId, OutputFormat, PageRequest, QuestionId, QuizDrawRequest, SearchTerm,
};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable text
    Text,
    /// JSON envelopes
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for trivia
#[derive(Parser, Debug)]
#[command(name = "trivia")]
#[command(author, version, about = "Trivia quiz questions - browse, search and play")]
#[command(long_about = r#"
Trivia stores quiz questions tagged with a category and a difficulty (1-5).

Listings and searches are paged ten questions at a time. A quiz draw picks a
random question you have not seen yet, optionally restricted to one category.

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia/config.toml   Global config

Example:
  trivia list --page 2
  trivia search "title"
  trivia add --question "Who discovered penicillin?" --answer "Alexander Fleming" --category 1 --difficulty 3
  trivia draw --category 4 --exclude 5,9
  trivia play --category 2
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Seed for reproducible quiz draws
    #[arg(long, value_name = "SEED", global = true)]
    pub rng_seed: Option<u64>,

    /// Use the JSON file store at PATH
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all categories
    Categories,

    /// List questions, ten per page
    List {
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Add a new question
    Add {
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
        #[arg(long)]
        category: Option<u64>,
        #[arg(long, allow_negative_numbers = true)]
        difficulty: Option<i64>,
    },

    /// Delete a question by id
    Delete { id: u64 },

    /// List every question in a category
    ByCategory { category: u64 },

    /// Search question text (case-insensitive)
    Search {
        term: String,
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },

    /// Draw one random question you have not seen
    Draw {
        /// Category id (0 = any category)
        #[arg(short, long, default_value_t = 0)]
        category: u64,
        /// Question ids already seen
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<u64>,
    },

    /// Play an interactive quiz
    Play {
        /// Category id (0 = any category)
        #[arg(short, long, default_value_t = 0)]
        category: u64,
        /// Number of questions (defaults to quiz.rounds from config)
        #[arg(short, long)]
        rounds: Option<usize>,
    },
}

impl Command {
    /// The one-shot request for this command, or `None` for interactive play
    pub fn request(&self) -> Option<Request> {
        let request = match self {
            Command::Categories => Request::ListCategories,
            Command::List { page } => Request::ListQuestions(PageRequest::new(*page)),
            Command::Add {
                question,
                answer,
                category,
                difficulty,
            } => Request::CreateQuestion(CreateQuestionInput {
                question: question.clone(),
                answer: answer.clone(),
                category: category.map(CategoryId::new),
                difficulty: *difficulty,
            }),
            Command::Delete { id } => Request::DeleteQuestion(QuestionId::new(*id)),
            Command::ByCategory { category } => {
                Request::QuestionsByCategory(CategoryId::new(*category))
            }
            Command::Search { term, page } => {
                Request::Search(SearchTerm::new(term.as_str()), PageRequest::new(*page))
            }
            Command::Draw { category, exclude } => Request::Draw(
                QuizDrawRequest::new(CategoryFilter::from_raw(*category))
                    .excluding(exclude.iter().copied().map(QuestionId::new)),
            ),
            Command::Play { .. } => return None,
        };
        Some(request)
    }
}
