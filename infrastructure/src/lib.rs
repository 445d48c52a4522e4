//! Infrastructure layer for trivia
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the `rand`-backed random sources and
//! configuration file loading.

pub mod config;
pub mod random;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileQuizConfig,
    FileStorageConfig, StorageBackend,
};
pub use random::{SeededRandomSource, ThreadRandomSource, random_source};
pub use storage::{
    InMemoryQuestionRepository, JsonFileQuestionRepository, SeedData, SeedError, StoreError,
    open_repository,
};
