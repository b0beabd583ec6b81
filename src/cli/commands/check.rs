use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::commands::generate::resolve_locale;
use crate::core::config::SiteConfig;
use crate::core::project::Project;
use crate::reports::default_reports;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the project (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Locale for report names
    #[arg(long)]
    pub locale: Option<String>,
}

pub async fn execute(args: &CheckArgs) -> Result<()> {
    let config = SiteConfig::load(&args.path);
    let project = Project::new(&args.path, &config)?;
    let locale = resolve_locale(args.locale.as_deref(), &config)?;

    let reports = default_reports(&project, &config);
    let mut runnable = 0;

    println!();
    for report in &reports {
        match report.can_generate().await {
            Ok(true) => {
                runnable += 1;
                println!(
                    "  {}  {} ({})",
                    "RUN ".green(),
                    report.name(&locale),
                    report.output_path()
                );
            }
            Ok(false) => {
                println!(
                    "  {}  {} ({})",
                    "SKIP".yellow(),
                    report.name(&locale),
                    report.output_path()
                );
            }
            Err(e) => {
                println!(
                    "  {}  {} ({}): {}",
                    "FAIL".red(),
                    report.name(&locale),
                    report.output_path(),
                    e
                );
            }
        }
    }
    println!();
    println!("  {} of {} reports would be generated", runnable, reports.len());
    Ok(())
}
