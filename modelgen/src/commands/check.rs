use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_codegen::Generator;
use modelgen_schema::ConfigFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to modelgen.toml (defaults to ./modelgen.toml)
    #[arg(short, long, default_value = "modelgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let (context, metadata) = config.load_inputs().unwrap_or_exit();

        let output = Generator::new(&metadata)
            .with_targets(config.generator().targets.clone())
            .run(&context)
            .unwrap_or_exit();

        let report = ops::check(config.path(), &context, &metadata, &output);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
