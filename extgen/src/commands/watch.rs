use std::path::PathBuf;

use clap::Args;
use extgen_manifest::PackageJson;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::TerminalOutput,
};

#[derive(Args)]
pub struct WatchCommand {
    /// Path to the extension manifest
    #[arg(short, long, default_value = "package.json")]
    pub input: PathBuf,

    /// Path of the generated TypeScript module
    #[arg(short, long, default_value = "src/generated/meta.ts")]
    pub output: PathBuf,
}

impl WatchCommand {
    /// Run the watch command until interrupted
    pub fn run(&self) -> Result<()> {
        let mut package = PackageJson::open(&self.input).unwrap_or_exit();

        ops::watch(
            &mut package,
            &GenerateOptions {
                output: &self.output,
                dry_run: false,
            },
            &mut TerminalOutput::new(),
        )
    }
}
