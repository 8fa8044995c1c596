//! Generate command report data structures.

use std::path::PathBuf;

use extgen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// `<publisher>.<name>` of the extension.
    pub extension_id: String,

    /// Extension version from the manifest.
    pub version: Option<String>,

    /// Human-readable extension name.
    pub display_name: Option<String>,

    /// Warning messages (member name collisions).
    pub warnings: Vec<String>,

    /// Number of declared commands.
    pub command_count: usize,

    /// Number of configuration properties.
    pub configuration_count: usize,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The module was written (or already up to date) on disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the module went to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Path the module would be written to.
    pub path: String,
    /// Generated module.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        // Header
        match &self.version {
            Some(version) => out.preformatted(&format!("{} v{}", self.extension_id, version)),
            None => out.preformatted(&self.extension_id),
        }
        if let Some(name) = &self.display_name {
            out.preformatted(name);
        }
        out.newline();

        self.render_counts(out);
        out.newline();

        let path = written.path.display().to_string();
        match written.write {
            WriteResult::Written => out.key_value("Generated", &path),
            WriteResult::Unchanged => out.key_value("Up to date", &path),
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.divider(&preview.path);
        out.preformatted(&preview.content);

        out.divider("Summary");
        self.render_counts(out);
    }

    fn render_counts(&self, out: &mut dyn Output) {
        out.key_value("Commands", &self.command_count.to_string());
        out.key_value("Configurations", &self.configuration_count.to_string());
    }
}
