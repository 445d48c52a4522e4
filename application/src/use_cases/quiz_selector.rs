//! Quiz draw use case
//!
//! Picks one question the player has not seen yet.

use super::error::{DrawScope, QuizError};
use crate::ports::question_repository::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{
    CategoryFilter, Question, QuizDrawRequest, RandomSource, eligible_pool, select_random,
};

/// Draws a uniformly random unseen question
pub struct QuizSelector<R: QuestionRepository + ?Sized + 'static> {
    repository: Arc<R>,
    rng: Arc<dyn RandomSource>,
}

impl<R: QuestionRepository + ?Sized + 'static> QuizSelector<R> {
    pub fn new(repository: Arc<R>, rng: Arc<dyn RandomSource>) -> Self {
        Self { repository, rng }
    }

    /// Draw one question.
    ///
    /// `request.excluded` is left untouched; the caller accumulates seen ids.
    pub async fn draw(&self, request: &QuizDrawRequest) -> Result<Question, QuizError> {
        let mut pool = match request.category {
            CategoryFilter::Any => self.repository.list_all().await?,
            CategoryFilter::Only(id) => self.repository.list_by_category(id).await?,
        };
        // Same seed, same draw: index into a stable order
        pool.sort_by_key(|q| q.id);

        let candidates = eligible_pool(&pool, &request.excluded);
        debug!(
            "Draw pool: {} questions, {} excluded, {} eligible",
            pool.len(),
            request.excluded.len(),
            candidates.len()
        );

        let picked = select_random(&candidates, self.rng.as_ref()).ok_or_else(|| {
            QuizError::PoolExhausted {
                category: DrawScope(request.category),
                excluded: request.excluded.len(),
            }
        })?;

        info!("Drew question {} ({} candidates)", picked.id, candidates.len());
        Ok((*picked).clone())
    }
}
