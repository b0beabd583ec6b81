use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::core::config::ApiDocConfig;
use crate::core::locale::{Locale, Localized};
use crate::reports::traits::{Report, ReportCategory, ReportError};
use crate::sink::Sink;

/// External report: delegates generation to a third-party documentation
/// tool and leaves only a pointer page in the sink. The tool writes its own
/// files under `<output dir>/apidoc`, exported via SITEFORGE_OUTPUT_DIR.
pub struct ApiDocReport {
    tool: String,
    args: Vec<String>,
    name: Localized,
    description: Localized,
    output_dir: PathBuf,
}

impl ApiDocReport {
    pub fn new(config: &ApiDocConfig) -> Self {
        Self {
            tool: config.tool.clone(),
            args: config.args.clone().unwrap_or_default(),
            name: Localized::new("API Documentation")
                .with("fr", "Documentation de l'API"),
            description: Localized::new("API documentation produced by an external tool.")
                .with("fr", "Documentation de l'API produite par un outil externe."),
            output_dir: PathBuf::new(),
        }
    }

    fn tool_output_dir(&self) -> PathBuf {
        self.output_dir.join(self.output_path())
    }
}

#[async_trait]
impl Report for ApiDocReport {
    fn output_path(&self) -> &str {
        "apidoc"
    }

    fn category(&self) -> ReportCategory {
        ReportCategory::ProjectReports
    }

    fn name(&self, locale: &Locale) -> String {
        self.name.resolve(locale).to_string()
    }

    fn description(&self, locale: &Locale) -> String {
        self.description.resolve(locale).to_string()
    }

    fn set_output_directory(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }

    fn output_directory(&self) -> &Path {
        &self.output_dir
    }

    fn is_external(&self) -> bool {
        true
    }

    /// Only runs when the configured tool is on PATH.
    async fn can_generate(&self) -> Result<bool, ReportError> {
        Ok(which::which(&self.tool).is_ok())
    }

    async fn generate(&self, sink: &mut dyn Sink, locale: &Locale) -> Result<(), ReportError> {
        let tool_dir = self.tool_output_dir();
        std::fs::create_dir_all(&tool_dir)?;

        let output = Command::new(&self.tool)
            .args(&self.args)
            .env("SITEFORGE_OUTPUT_DIR", &tool_dir)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReportError::ExternalTool {
                tool: self.tool.clone(),
                reason: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        let title = self.name(locale);
        sink.head(&title)?;
        sink.section(1, &title)?;
        sink.paragraph(self.description.resolve(locale))?;
        sink.link(
            &format!("{}/", self.output_path()),
            &format!("Output of {}", self.tool),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use tempfile::TempDir;

    fn report(tool: &str, args: &[&str]) -> ApiDocReport {
        ApiDocReport::new(&ApiDocConfig {
            tool: tool.to_string(),
            args: Some(args.iter().map(|s| s.to_string()).collect()),
        })
    }

    #[test]
    fn test_is_external() {
        assert!(report("doxygen", &[]).is_external());
        assert_eq!(report("doxygen", &[]).category(), ReportCategory::ProjectReports);
    }

    #[tokio::test]
    async fn test_gate_closed_for_missing_tool() {
        let report = report("siteforge-no-such-tool", &[]);
        assert!(!report.can_generate().await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_gate_open_for_available_tool() {
        assert!(report("sh", &[]).can_generate().await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generate_runs_tool_and_writes_pointer() {
        let tmp = TempDir::new().unwrap();
        let mut report = report("sh", &["-c", "touch \"$SITEFORGE_OUTPUT_DIR/out.txt\""]);
        report.set_output_directory(tmp.path().to_path_buf());

        let mut sink = BufferSink::new();
        report.generate(&mut sink, &Locale::english()).await.unwrap();

        assert!(tmp.path().join("apidoc/out.txt").exists());
        assert_eq!(sink.head_count(), 1);
        assert!(sink.text().contains("Output of sh"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generate_reports_tool_failure() {
        let tmp = TempDir::new().unwrap();
        let mut report = report("sh", &["-c", "echo broken >&2; exit 3"]);
        report.set_output_directory(tmp.path().to_path_buf());

        let mut sink = BufferSink::new();
        let err = report
            .generate(&mut sink, &Locale::english())
            .await
            .unwrap_err();
        match err {
            ReportError::ExternalTool { tool, reason } => {
                assert_eq!(tool, "sh");
                assert!(reason.contains("broken"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
