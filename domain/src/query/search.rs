//! Case-insensitive substring search over question text

use serde::{Deserialize, Serialize};

/// A normalized search term.
///
/// A blank term (empty or whitespace only) matches every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let needle = if raw.trim().is_empty() {
            String::new()
        } else {
            raw.to_lowercase()
        };
        Self { raw, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.is_blank() {
            return true;
        }
        text.to_lowercase().contains(&self.needle)
    }
}

/// True iff `term` occurs in `text`, ignoring case
pub fn matches(text: &str, term: &str) -> bool {
    SearchTerm::new(term).matches(text)
}
