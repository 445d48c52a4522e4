//! Category entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A question category (e.g. "Science", "History")
///
/// Serialized with the `type` key the stored records have always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_name_as_type() {
        let category = Category::new(1, "Science");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "type": "Science" }));
    }

    #[test]
    fn test_category_id_display() {
        assert_eq!(CategoryId::new(42).to_string(), "42");
    }
}
