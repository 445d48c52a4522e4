//! Interactive quiz: caller-side session state and the REPL that drives it

pub mod repl;
pub mod session;

pub use repl::QuizRepl;
pub use session::{QuizSession, answer_matches};
