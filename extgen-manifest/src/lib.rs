//! Extension manifest parsing for extgen.
//!
//! Reads the subset of a VS Code style `package.json` that code generation
//! consumes: metadata, `contributes.commands` and
//! `contributes.configuration`. Parse failures are reported as
//! [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CommandEntry, Configuration, ConfigurationGroup, Contributes, Manifest, PackageJson,
    SchemaNode, SchemaType, parse_manifest,
};
