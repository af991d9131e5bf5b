mod check;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

impl<T> UnwrapOrExit<T> for modelgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e)))
    }
}

impl<T> UnwrapOrExit<T> for modelgen_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e)))
    }
}

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(version)]
#[command(about = "Generate Java models and DTOs from a database schema snapshot")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from modelgen.toml
    Generate(GenerateCommand),

    /// Validate the config, schema and metadata without writing files
    Check(CheckCommand),
}
