pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "siteforge", version, about = "Generate a project report site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate all reports into the site output directory
    Generate(commands::generate::GenerateArgs),
    /// List the registered reports
    List(commands::list::ListArgs),
    /// Show which reports can currently be generated
    Check(commands::check::CheckArgs),
}
