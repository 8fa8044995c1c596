//! Generate operation - TypeScript module from the manifest.

use std::path::Path;

use extgen_codegen::schema::SymbolCollision;
use extgen_codegen_typescript::{Generator, LanguageCodegen};
use extgen_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Path of the generated module.
    pub output: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Renders the module and, unless previewing, writes it when its content changed.
pub fn generate(manifest: &Manifest, opts: &GenerateOptions) -> Result<GenerateReport> {
    let generator = Generator::new(manifest);
    let warnings: Vec<String> = generator.collisions().map(collision_warning).collect();

    let result = if opts.dry_run {
        let preview = generator.preview(opts.output);
        GenerationResult::Preview(PreviewResult {
            path: preview.path,
            content: preview.content,
        })
    } else {
        let generated = generator
            .generate(opts.output)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            path: generated.path,
            write: generated.write,
        })
    };

    Ok(GenerateReport {
        extension_id: manifest.extension_id(),
        version: manifest.version_text(),
        display_name: manifest.display_name_text(),
        warnings,
        command_count: manifest.commands().len(),
        configuration_count: manifest.configuration_properties().len(),
        result,
    })
}

fn collision_warning(collision: &SymbolCollision) -> String {
    format!(
        "`{}` and `{}` both map to member `{}`; keeping `{}`",
        collision.previous, collision.replacement, collision.symbol, collision.replacement
    )
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use extgen_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"{
        "publisher": "acme",
        "name": "demo",
        "version": "0.3.0",
        "contributes": {
            "commands": [
                { "command": "demo.run", "title": "Run" },
                { "command": "demo.stop", "title": "Stop" }
            ],
            "configuration": {
                "properties": {
                    "demo.foo-bar": { "type": "string" },
                    "demo.fooBar": { "type": "number" }
                }
            }
        }
    }"#;

    #[test]
    fn test_generate_writes_module() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("src").join("generated").join("meta.ts");
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let opts = GenerateOptions {
            output: &output,
            dry_run: false,
        };

        let report = generate(&manifest, &opts).unwrap();
        assert_eq!(report.extension_id, "acme.demo");
        assert_eq!(report.version.as_deref(), Some("0.3.0"));
        assert_eq!(report.command_count, 2);
        assert_eq!(report.configuration_count, 2);
        assert!(matches!(
            report.result,
            GenerationResult::Written(WrittenResult {
                write: WriteResult::Written,
                ..
            })
        ));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            extgen_codegen_typescript::generate(&manifest)
        );

        let again = generate(&manifest, &opts).unwrap();
        assert!(matches!(
            again.result,
            GenerationResult::Written(WrittenResult {
                write: WriteResult::Unchanged,
                ..
            })
        ));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("meta.ts");
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            &GenerateOptions {
                output: &output,
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(preview.path, output.display().to_string());
        assert!(preview.content.contains("export type CommandId =\n"));
        assert!(!output.exists());
    }

    #[test]
    fn test_collisions_become_warnings() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let report = generate(
            &manifest,
            &GenerateOptions {
                output: &temp.path().join("meta.ts"),
                dry_run: true,
            },
        )
        .unwrap();

        assert_eq!(
            report.warnings,
            ["`demo.foo-bar` and `demo.fooBar` both map to member `FooBar`; keeping `demo.fooBar`"]
        );
    }
}
