//! Domain layer for trivia
//!
//! This crate contains the entities, value objects and pure selection rules.
//! It has no dependencies on storage, randomness backends or presentation.
//!
//! # Core Concepts
//!
//! ## Questions and categories
//!
//! A [`Question`] carries its text, answer, category and a difficulty in
//! `1..=5`. Categories are seeded externally and exposed through a
//! [`CategoryIndex`].
//!
//! ## Queries
//!
//! Listings are paged ten at a time ([`paginate`]) and searched with a
//! case-insensitive substring match ([`SearchTerm`]).
//!
//! ## Quiz draws
//!
//! A draw picks one question uniformly at random from the eligible pool: the
//! filtered category minus the ids the player has already seen.

pub mod category;
pub mod config;
pub mod core;
pub mod query;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use category::{Category, CategoryId, CategoryIndex};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use query::{PAGE_SIZE, PageRequest, SearchTerm, matches, paginate};
pub use question::{Difficulty, NewQuestion, Question, QuestionId};
pub use quiz::{
    CategoryFilter, QuizDrawRequest, RandomSource, eligible_pool, select_random,
};
