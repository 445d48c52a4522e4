//! Command-line gateway: argument parsing and request dispatch

pub mod commands;
pub mod request;
