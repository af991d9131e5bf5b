use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_codegen::Generator;
use modelgen_schema::{ConfigFile, Target};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to modelgen.toml (defaults to ./modelgen.toml)
    #[arg(short, long, default_value = "modelgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides modelgen.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the scope list to scopes.json
    #[arg(long)]
    pub emit_scopes: bool,

    /// Only generate these targets (overrides modelgen.toml setting)
    #[arg(short, long = "target", value_name = "TARGET")]
    pub targets: Vec<Target>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let (context, metadata) = config.load_inputs().unwrap_or_exit();
        let settings = config.generator();

        let targets = if self.targets.is_empty() {
            settings.targets.clone()
        } else {
            self.targets.clone()
        };
        let output_dir = self.output.clone().unwrap_or_else(|| config.output_dir());

        let output = Generator::new(&metadata)
            .with_targets(targets)
            .run(&context)
            .unwrap_or_exit();

        let report = ops::generate(
            &output,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                emit_scopes: self.emit_scopes || settings.emit_scopes,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
