use std::path::PathBuf;

use clap::Args;
use extgen_manifest::PackageJson;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the extension manifest
    #[arg(short, long, default_value = "package.json")]
    pub input: PathBuf,

    /// Path of the generated TypeScript module
    #[arg(short, long, default_value = "src/generated/meta.ts")]
    pub output: PathBuf,

    /// Print the generated module without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let package = PackageJson::open(&self.input).unwrap_or_exit();

        let report = ops::generate(
            package.manifest(),
            &GenerateOptions {
                output: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
