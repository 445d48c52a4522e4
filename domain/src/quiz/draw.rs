//! Quiz draw request and the selection rules

use super::random::RandomSource;
use crate::category::CategoryId;
use crate::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which categories a draw may pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Every category
    #[default]
    Any,
    /// A single category
    Only(CategoryId),
}

impl CategoryFilter {
    /// Interpret a raw category id where `0` means "all categories".
    pub fn from_raw(id: u64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Only(CategoryId::new(id))
        }
    }

    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(*id),
        }
    }
}

impl From<Option<CategoryId>> for CategoryFilter {
    fn from(id: Option<CategoryId>) -> Self {
        match id {
            Some(id) => Self::Only(id),
            None => Self::Any,
        }
    }
}

/// Input to a single quiz draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDrawRequest {
    pub category: CategoryFilter,
    pub excluded: HashSet<QuestionId>,
}

impl QuizDrawRequest {
    pub fn new(category: CategoryFilter) -> Self {
        Self {
            category,
            excluded: HashSet::new(),
        }
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = QuestionId>) -> Self {
        self.excluded.extend(ids);
        self
    }
}

/// Questions from `pool` whose ids are not in `excluded`, order preserved
pub fn eligible_pool<'a>(
    pool: &'a [Question],
    excluded: &HashSet<QuestionId>,
) -> Vec<&'a Question> {
    pool.iter().filter(|q| !excluded.contains(&q.id)).collect()
}

/// Pick one element uniformly at random, or `None` for an empty slice
pub fn select_random<'a, T>(candidates: &'a [T], rng: &dyn RandomSource) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.next_index(candidates.len());
    candidates.get(index.min(candidates.len() - 1))
}
