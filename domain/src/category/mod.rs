//! Categories and the category index.
//!
//! Categories are seeded externally and read-only from the service's point of
//! view. [`CategoryIndex`] is the id → display name view used for listings.

pub mod entities;
pub mod index;

pub use entities::{Category, CategoryId};
pub use index::CategoryIndex;
