//! Query helpers: pagination and free-text search.

pub mod pagination;
pub mod search;

pub use pagination::{PAGE_SIZE, PageRequest, paginate};
pub use search::{SearchTerm, matches};
