//! Category index - id → display name lookup

use super::entities::{Category, CategoryId};
use crate::core::error::DomainError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Lookup table from category id to display name.
///
/// Iteration order is by display name (ties broken by id), which is the order
/// listings present categories in. Serializes as a JSON object keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<Category>,
}

impl CategoryIndex {
    /// Build an index, rejecting duplicate ids
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Result<Self, DomainError> {
        let mut entries: Vec<Category> = categories.into_iter().collect();

        entries.sort_by_key(|c| c.id);
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(DomainError::DuplicateCategory(pair[0].id));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(Self { entries })
    }

    pub fn exists(&self, id: CategoryId) -> bool {
        self.entries.iter().any(|c| c.id == id)
    }

    pub fn name(&self, id: CategoryId) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Categories ordered by display name
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for category in &self.entries {
            map.serialize_entry(&category.id.to_string(), &category.name)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryIndex {
        CategoryIndex::new(vec![
            Category::new(1, "Science"),
            Category::new(2, "Art"),
            Category::new(3, "Geography"),
        ])
        .unwrap()
    }

    #[test]
    fn test_ordered_by_display_name() {
        let names: Vec<_> = sample().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Art", "Geography", "Science"]);
    }

    #[test]
    fn test_exists_and_name() {
        let index = sample();
        assert!(index.exists(CategoryId::new(2)));
        assert!(!index.exists(CategoryId::new(9)));
        assert_eq!(index.name(CategoryId::new(3)), Some("Geography"));
        assert_eq!(index.name(CategoryId::new(9)), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = CategoryIndex::new(vec![Category::new(1, "Science"), Category::new(1, "Art")]);
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateCategory(CategoryId::new(1))
        );
    }

    #[test]
    fn test_serializes_as_id_keyed_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"2":"Art","3":"Geography","1":"Science"}"#);
    }

    #[test]
    fn test_empty_index() {
        let index = CategoryIndex::new(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
