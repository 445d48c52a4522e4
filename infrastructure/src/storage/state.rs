//! In-process question store shared by the repository adapters

use super::seed::{SeedData, SeedError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trivia_domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Questions keyed by id plus the category table.
///
/// Ids increase monotonically and are never reused, even after a delete.
/// Serialized as the snapshot format of the JSON file store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    next_id: u64,
    categories: Vec<Category>,
    #[serde(with = "question_list")]
    questions: BTreeMap<QuestionId, Question>,
}

impl StoreState {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            next_id: 1,
            categories,
            questions: BTreeMap::new(),
        }
    }

    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let (categories, questions) = seed.validate()?;
        let mut state = Self::new(categories);
        for question in questions {
            state.insert(question);
        }
        Ok(state)
    }

    pub fn insert(&mut self, question: NewQuestion) -> QuestionId {
        // A snapshot may carry a stale next_id; never hand out a stored id
        let after_last = self
            .questions
            .last_key_value()
            .map_or(1, |(id, _)| id.value() + 1);
        let id = QuestionId::new(self.next_id.max(after_last));
        self.next_id = id.value() + 1;
        self.questions.insert(id, Question::from_new(id, question));
        id
    }

    pub fn delete(&mut self, id: QuestionId) -> bool {
        self.questions.remove(&id).is_some()
    }

    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// Questions in id order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn in_category(&self, category: CategoryId) -> impl Iterator<Item = &Question> {
        self.questions.values().filter(move |q| q.category == category)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Store the question map as a plain list; the id lives inside each record
mod question_list {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;
    use trivia_domain::{Question, QuestionId};

    pub fn serialize<S: Serializer>(
        questions: &BTreeMap<QuestionId, Question>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(questions.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<QuestionId, Question>, D::Error> {
        let list = Vec::<Question>::deserialize(deserializer)?;
        let mut questions = BTreeMap::new();
        for question in list {
            let id = question.id;
            if questions.insert(id, question).is_some() {
                return Err(D::Error::custom(format!("duplicate question id {}", id)));
            }
        }
        Ok(questions)
    }
}
