//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use extgen_core::{File, WriteResult};
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating the manifest module
/// in a new language. Only [`render`](LanguageCodegen::render) is required;
/// it must be a pure function of the manifest.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render the complete generated module.
    fn render(&self) -> String;

    /// Preview the generated file without writing to disk
    fn preview(&self, output: &Path) -> PreviewFile {
        PreviewFile {
            path: output.display().to_string(),
            content: self.render(),
        }
    }

    /// Write the generated module to `output`, skipping the write when the
    /// file is already up to date.
    fn generate(&self, output: &Path) -> Result<GenerateResult> {
        let write = File::new(output, self.render()).write()?;
        Ok(GenerateResult {
            path: output.to_path_buf(),
            write,
        })
    }
}

/// Result of code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Path of the generated file
    pub path: PathBuf,
    /// Whether the file was written or already up to date
    pub write: WriteResult,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: String,
    /// File content
    pub content: String,
}
