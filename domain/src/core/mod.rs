//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: validation errors raised while building entities

pub mod error;
