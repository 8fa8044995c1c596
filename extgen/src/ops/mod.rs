//! Core operations.
//!
//! This module contains the business logic for extgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod watch;

pub use generate::{GenerateOptions, generate};
pub use watch::watch;
