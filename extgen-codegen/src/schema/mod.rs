//! Manifest views prepared for code generation.
//!
//! - [`CommandInfo`] / [`ConfigurationInfo`] - per-entry metadata with member names
//! - [`type_ref`] - schema node to language-agnostic type
//! - [`SymbolTable`] - member-keyed maps with last-write-wins collisions

mod info;
mod symbols;
mod types;

pub use info::{CommandInfo, ConfigurationInfo, collect_commands, collect_configurations};
pub use symbols::{SymbolCollision, SymbolTable};
pub use types::type_ref;
