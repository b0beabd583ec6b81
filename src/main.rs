mod cli;
mod core;
mod reports;
mod sink;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => {
            cli::commands::generate::execute(args).await?;
        }
        Commands::List(args) => {
            cli::commands::list::execute(args).await?;
        }
        Commands::Check(args) => {
            cli::commands::check::execute(args).await?;
        }
    }

    Ok(())
}
