//! Fixed-size pagination over ordered results

use serde::{Deserialize, Serialize};

/// Number of items per page
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
///
/// Page numbers below 1 are clamped to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u64")]
pub struct PageRequest(u64);

impl PageRequest {
    pub fn new(page: i64) -> Self {
        Self(page.max(1) as u64)
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    /// Zero-based index of the first item on this page
    pub fn offset(&self) -> usize {
        usize::try_from(self.0 - 1)
            .ok()
            .and_then(|p| p.checked_mul(PAGE_SIZE))
            .unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

impl From<i64> for PageRequest {
    fn from(page: i64) -> Self {
        Self::new(page)
    }
}

impl From<PageRequest> for u64 {
    fn from(page: PageRequest) -> Self {
        page.0
    }
}

/// Return the slice of `items` belonging to `page`.
///
/// Out-of-range pages yield an empty slice. Callers must supply a stable
/// order (id ascending) or page boundaries shift between calls.
pub fn paginate<T>(items: &[T], page: PageRequest) -> &[T] {
    let start = page.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_first_page() {
        let items = numbers(25);
        assert_eq!(paginate(&items, PageRequest::new(1)), &items[0..10]);
    }

    #[test]
    fn test_last_partial_page() {
        let items = numbers(25);
        assert_eq!(paginate(&items, PageRequest::new(3)), &items[20..25]);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let items = numbers(10);
        assert!(paginate(&items, PageRequest::new(2)).is_empty());
        assert!(paginate(&items, PageRequest::new(1000)).is_empty());
    }

    #[test]
    fn test_never_more_than_page_size() {
        let items = numbers(57);
        for page in 1..=8 {
            let slice = paginate(&items, PageRequest::new(page));
            assert!(slice.len() <= PAGE_SIZE);
            let start = (page as usize - 1) * PAGE_SIZE;
            let expected: Vec<_> = (start..(start + PAGE_SIZE).min(57)).collect();
            assert_eq!(slice, expected.as_slice());
        }
    }

    #[test]
    fn test_non_positive_page_clamped() {
        assert_eq!(PageRequest::new(0), PageRequest::first());
        assert_eq!(PageRequest::new(-4).number(), 1);
        let items = numbers(3);
        assert_eq!(paginate(&items, PageRequest::new(-4)), &items[..]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<usize> = Vec::new();
        assert!(paginate(&items, PageRequest::first()).is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let items = numbers(3);
        assert!(paginate(&items, PageRequest::new(i64::MAX)).is_empty());
    }

    #[test]
    fn test_deserialize_clamps() {
        let page: PageRequest = serde_json::from_str("-3").unwrap();
        assert_eq!(page.number(), 1);
    }
}
