//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration
//! - [`comment_block`] - Documentation comment formatting
//!
//! # Types
//!
//! - [`TypeRef`] - Language-agnostic type references
//! - [`TypeMapper`] - Trait for language-specific type rendering

mod code_builder;
mod doc;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use doc::comment_block;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::{PrimitiveType, TypeMapper, TypeRef};
