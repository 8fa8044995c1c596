//! TypeScript code generator for extgen.
//!
//! This crate turns an extension manifest (`package.json`) into a TypeScript
//! module of typed constants, so that command identifiers and configuration
//! keys are checked by the compiler instead of being passed around as raw
//! strings.
//!
//! # Usage
//!
//! ```
//! use std::str::FromStr;
//!
//! use extgen_codegen_typescript::generate;
//! use extgen_manifest::Manifest;
//!
//! let manifest = Manifest::from_str(
//!     r#"{ "name": "demo", "contributes": { "commands": [{ "command": "demo.run", "title": "Run" }] } }"#,
//! )
//! .unwrap();
//!
//! let code = generate(&manifest);
//! assert!(code.contains("  Run: \"demo.run\",\n"));
//! ```
//!
//! To write the module to disk, use [`Generator`] through [`LanguageCodegen`]:
//!
//! ```ignore
//! let result = Generator::new(&manifest).generate(Path::new("src/generated/meta.ts"))?;
//! ```
//!
//! # Generated Output
//!
//! - metadata constants (`publisher`, `name`, `version`, `displayName`,
//!   `description`, `extensionName`)
//! - `CommandId` union and `commands` map
//! - `ConfigurationId` union, `configurations` map, `configurationsDefaults`
//!   and the `ConfigurationTypeMap` interface

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use extgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{Generator, generate};
pub use naming::TS_NAMING;
pub use type_mapper::TypeScriptTypeMapper;
