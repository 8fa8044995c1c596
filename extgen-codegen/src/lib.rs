//! Shared code generation utilities for extgen.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `extgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`schema`] - Manifest traversal and info types (CommandInfo, ConfigurationInfo, SymbolTable)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)

pub mod builder;
pub mod language;
pub mod schema;
