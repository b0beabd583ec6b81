use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::progress::RunProgress;
use crate::core::config::SiteConfig;
use crate::core::locale::Locale;
use crate::core::project::Project;
use crate::core::runner::{ReportOutcome, ReportRunner};
use crate::reports::default_reports;
use crate::sink::{SinkFactory, SinkFormat};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the project (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output directory for the generated site
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "html", value_parser = ["html", "markdown"])]
    pub format: String,

    /// Locale for report text, e.g. en or fr-FR
    #[arg(long)]
    pub locale: Option<String>,

    /// Output paths of reports to skip
    #[arg(long)]
    pub skip: Vec<String>,
}

pub fn resolve_locale(arg: Option<&str>, config: &SiteConfig) -> Result<Locale> {
    let tag = arg
        .map(String::from)
        .or_else(|| config.site.as_ref().and_then(|s| s.locale.clone()));
    match tag {
        Some(tag) => tag
            .parse()
            .with_context(|| format!("cannot parse locale '{}'", tag)),
        None => Ok(Locale::default()),
    }
}

pub fn resolve_output_dir(arg: Option<&Path>, config: &SiteConfig, project_path: &Path) -> PathBuf {
    let dir = arg
        .map(Path::to_path_buf)
        .or_else(|| {
            config
                .site
                .as_ref()
                .and_then(|s| s.output_dir.as_ref().map(PathBuf::from))
        })
        .unwrap_or_else(|| PathBuf::from("site"));
    if dir.is_absolute() {
        dir
    } else {
        project_path.join(dir)
    }
}

pub async fn execute(args: &GenerateArgs) -> Result<()> {
    let config = SiteConfig::load(&args.path);
    let project = Project::new(&args.path, &config)?;
    let locale = resolve_locale(args.locale.as_deref(), &config)?;
    let output_dir = resolve_output_dir(args.output.as_deref(), &config, &project.path);
    let factory = SinkFactory::new(SinkFormat::from_name(&args.format));

    let mut reports = default_reports(&project, &config);
    reports.retain(|r| !args.skip.iter().any(|s| s == r.output_path()));
    let mut runner = ReportRunner::new(reports)?;

    let progress = RunProgress::new();
    let summary = runner
        .run(&locale, &output_dir, &factory, |name| {
            progress.set_report(name)
        })
        .await?;
    progress.finish();

    let index = runner.write_index(&project.manifest.name, &locale, &output_dir, &factory, &summary)?;

    for (key, outcome) in &summary.outcomes {
        match outcome {
            ReportOutcome::Generated(file) => {
                println!("  {} {} -> {}", "DONE".green(), key, file.display());
            }
            ReportOutcome::Skipped(reason) => {
                println!("  {} {} ({})", "SKIP".yellow(), key, reason);
            }
            ReportOutcome::Failed(reason) => {
                println!("  {} {} ({})", "FAIL".red(), key, reason);
            }
        }
    }

    let file_count = WalkDir::new(&output_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    println!();
    println!(
        "  {} reports generated, {} skipped, {} failed in {:.1}s",
        summary.generated(),
        summary.skipped(),
        summary.failed(),
        summary.duration.as_secs_f64()
    );
    println!(
        "  Site written to {} ({} files, index at {})",
        output_dir.display(),
        file_count,
        index.display()
    );

    if summary.has_failures() {
        bail!("{} report(s) failed", summary.failed());
    }
    Ok(())
}
