use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::commands::generate::resolve_locale;
use crate::cli::output::OutputFormatter;
use crate::core::config::SiteConfig;
use crate::core::project::Project;
use crate::reports::default_reports;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the project (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Locale for report names and descriptions
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn execute(args: &ListArgs) -> Result<()> {
    let config = SiteConfig::load(&args.path);
    let project = Project::new(&args.path, &config)?;
    let locale = resolve_locale(args.locale.as_deref(), &config)?;

    let reports = default_reports(&project, &config);
    let formatter = OutputFormatter::new(&args.format);
    formatter.display_reports(&reports, &locale);
    Ok(())
}
