//! Use cases (application services)

pub mod error;
pub mod question_service;
pub mod quiz_selector;

#[cfg(test)]
pub(crate) mod test_support;
