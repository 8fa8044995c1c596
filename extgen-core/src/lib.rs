//! Core utilities and types for extgen.
//!
//! This crate provides fundamental types and utilities used across
//! the extgen crates.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{split_words, to_pascal_case};
