//! Quiz draws: picking one unseen question at random.
//!
//! Draws are stateless. The caller keeps the set of already-seen question ids
//! and passes it in with every [`QuizDrawRequest`].

pub mod draw;
pub mod random;

pub use draw::{CategoryFilter, QuizDrawRequest, eligible_pool, select_random};
pub use random::RandomSource;
