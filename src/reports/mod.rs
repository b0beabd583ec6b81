pub mod apidoc;
pub mod dependencies;
pub mod summary;
pub mod traits;

pub use apidoc::ApiDocReport;
pub use dependencies::DependenciesReport;
pub use summary::SummaryReport;
pub use traits::{Report, ReportCategory, ReportError};

use crate::core::config::SiteConfig;
use crate::core::project::Project;

/// Build the report set for a project, honoring the config skip list.
/// The external apidoc report is registered only when a tool is configured.
pub fn default_reports(project: &Project, config: &SiteConfig) -> Vec<Box<dyn Report>> {
    let mut reports: Vec<Box<dyn Report>> = vec![
        Box::new(SummaryReport::new(project.manifest.clone())),
        Box::new(DependenciesReport::new(project.manifest.clone())),
    ];

    if let Some(apidoc) = config.site.as_ref().and_then(|s| s.apidoc.as_ref()) {
        reports.push(Box::new(ApiDocReport::new(apidoc)));
    }

    let skipped = config.skipped_reports();
    reports.retain(|r| !skipped.iter().any(|s| s == r.output_path()));
    reports
}
