use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::locale::Locale;
use crate::sink::Sink;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    ProjectInformation,
    ProjectReports,
    Custom(String),
}

impl std::fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportCategory::ProjectInformation => write!(f, "Project Info"),
            ReportCategory::ProjectReports => write!(f, "Project Reports"),
            ReportCategory::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Raised when a report cannot be generated or its precondition check
/// cannot complete.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("i/o failure while generating report: {0}")]
    Io(#[from] io::Error),

    #[error("report '{report}' is missing a prerequisite: {reason}")]
    MissingPrerequisite { report: String, reason: String },

    #[error("external tool '{tool}' failed: {reason}")]
    ExternalTool { tool: String, reason: String },

    #[error("report '{report}' failed to render: {reason}")]
    Render { report: String, reason: String },
}

/// Contract every report satisfies. A report is constructed with whatever
/// data it renders from, configured with the shared output directory by the
/// runner, queried for its metadata, then either skipped (`can_generate`
/// false) or generated into a sink.
#[async_trait]
pub trait Report: Send + Sync {
    /// Path relative to the shared output directory where the report's main
    /// output file is written, without extension (the sink layer appends
    /// one). Stable for the lifetime of the instance; the runner uses it as
    /// a unique key.
    fn output_path(&self) -> &str;

    /// Alias kept for callers that predate `output_path`.
    #[deprecated(note = "use output_path instead")]
    fn output_name(&self) -> &str {
        self.output_path()
    }

    /// Category used to group reports in the site navigation.
    fn category(&self) -> ReportCategory;

    /// Localized report name. Unsupported locales fall back to the default
    /// text; this never fails.
    fn name(&self, locale: &Locale) -> String;

    /// Localized report description, with the same fallback behavior.
    fn description(&self, locale: &Locale) -> String;

    /// Associate the shared output directory. Set once by the runner before
    /// generation.
    fn set_output_directory(&mut self, dir: PathBuf);

    fn output_directory(&self) -> &Path;

    /// True when generation delegates to a third-party program rather than
    /// rendering through the sink.
    fn is_external(&self) -> bool {
        false
    }

    /// Precondition gate. The runner checks this before `generate` and
    /// skips the report when it returns false. May fail if the check itself
    /// requires I/O.
    async fn can_generate(&self) -> Result<bool, ReportError> {
        Ok(true)
    }

    /// Render the report into the sink for the given locale.
    async fn generate(&self, sink: &mut dyn Sink, locale: &Locale) -> Result<(), ReportError>;
}
